use std::io::{stdout, Stdout, Write};

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::{commands::Reply, config_io::ConfigIO};

pub const PROMPT: &str = "> ";

/// Output of a session, styled only if attached to a terminal.
pub struct Window {
    out: Stdout,
    config_io: ConfigIO,
}

impl Window {
    pub fn new(config_io: ConfigIO) -> Self {
        Window {
            out: stdout(),
            config_io,
        }
    }

    pub fn banner(&mut self) -> std::io::Result<()> {
        if !self.config_io.chatty {
            return Ok(());
        }

        if self.config_io.styled {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print("Logic Chatbot\n"))?;
        if self.config_io.styled {
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        self.out.queue(Print("Type 'help' for a list of commands, or 'exit' to quit\n"))?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> std::io::Result<()> {
        if !self.config_io.chatty {
            return Ok(());
        }

        match self.config_io.styled {
            true => {
                self.out.queue(SetForegroundColor(Color::Cyan))?;
                self.out.queue(Print(PROMPT))?;
                self.out.queue(ResetColor)?;
            }
            false => {
                self.out.queue(Print(PROMPT))?;
            }
        }
        self.out.flush()
    }

    pub fn reply(&mut self, reply: &Reply) -> std::io::Result<()> {
        match reply {
            Reply::Message(message) => {
                self.out.queue(Print(message))?;
                self.out.queue(Print("\n"))?;
            }

            Reply::Error(message) => {
                if self.config_io.styled {
                    self.out.queue(SetForegroundColor(Color::Red))?;
                }
                self.out.queue(Print(message))?;
                if self.config_io.styled {
                    self.out.queue(ResetColor)?;
                }
                self.out.queue(Print("\n"))?;
            }

            Reply::Goodbye => {
                self.out.queue(Print("Goodbye!\n"))?;
            }

            Reply::Silent => {}
        }
        self.out.flush()
    }
}
