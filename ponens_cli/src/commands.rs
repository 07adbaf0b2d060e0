/*!
Dispatch of a line of input to a context.

A line is either a bare command (`help`, `list kb`, `exit`, …) or a command with an argument, separated by a colon (`tell: p implies q`).
Inference commands take two formulas, separated by a semicolon (`modus_ponens: p; p implies q`).
*/

use ponens::{
    context::Context,
    oracle::TruthTable,
    reports::{InferenceReport, TellReport},
    types::err::ErrorKind,
};

pub const HELP: &str = "Commands:
  tell: <formula>                    add a formula to the knowledge base
  ask: <formula>                     ask whether the knowledge base entails a formula
  list kb                            list the knowledge base
  to_cnf: <formula>                  convert a formula to conjunctive normal form
  truth_table: <formula>             show the truth table of a formula
  modus_ponens: <premise>; <implication>
  resolution: <clause>; <clause>
  help                               show this message
  exit                               leave

Formulas use the variables you name, 'not', 'and', 'or', 'implies', 'iff' and parentheses.";

pub const UNKNOWN: &str = "Sorry, I don't understand that. Type 'help' for a list of commands.";

/// A reply to a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// A reply to print.
    Message(String),

    /// A failed command, to be printed as an error.
    Error(String),

    /// Nothing to reply, e.g. to a blank line.
    Silent,

    /// The session is over.
    Goodbye,
}

impl From<ErrorKind> for Reply {
    fn from(e: ErrorKind) -> Self {
        Reply::Error(format!("Error: {e}"))
    }
}

/// Dispatches `line` to `context`, and returns the reply.
pub fn handle_message(context: &mut Context, line: &str) -> Reply {
    let line = line.trim();
    if line.is_empty() {
        return Reply::Silent;
    }

    let Some((command, argument)) = line.split_once(':') else {
        return match line.to_ascii_lowercase().as_str() {
            "help" => Reply::Message(HELP.to_string()),
            "list kb" | "list_kb" => Reply::Message(list_kb(context)),
            "exit" | "quit" => Reply::Goodbye,
            _ => Reply::Message(UNKNOWN.to_string()),
        };
    };

    let argument = argument.trim();
    let result = match command.trim().to_ascii_lowercase().as_str() {
        "tell" => context.tell_str(argument).map(|report| report.to_string()),

        "ask" => context.ask_str(argument).map(|report| report.to_string()),

        "to_cnf" => context.cnf_str(argument).map(|(formula, cnf)| {
            format!("original formula: {formula}\nconverted to CNF: {cnf}")
        }),

        "truth_table" => context
            .truth_table_str(argument)
            .map(|table| format_truth_table(&table, argument)),

        "modus_ponens" => {
            let Some((premise, implication)) = argument.split_once(';') else {
                return pair_expected("modus_ponens");
            };
            context
                .modus_ponens_str(premise, implication)
                .map(|report| inference_reply("modus ponens", report))
        }

        "resolution" => {
            let Some((first, second)) = argument.split_once(';') else {
                return pair_expected("resolution");
            };
            context
                .resolution_str(first, second)
                .map(|report| inference_reply("resolution", report))
        }

        _ => return Reply::Message(UNKNOWN.to_string()),
    };

    match result {
        Ok(message) => Reply::Message(message),
        Err(e) => Reply::from(e),
    }
}

fn pair_expected(command: &str) -> Reply {
    Reply::Error(format!(
        "Error: {command} expects two formulas separated by ';'"
    ))
}

/// The knowledge base as a numbered list.
fn list_kb(context: &Context) -> String {
    if context.formulas().is_empty() {
        return "Knowledge base is empty.".to_string();
    }

    context
        .formulas()
        .iter()
        .enumerate()
        .map(|(index, formula)| format!("{}. {formula}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn inference_reply(rule: &str, report: InferenceReport) -> String {
    match report {
        InferenceReport::Told { conclusion, report } => match report {
            TellReport::Learned => format!("applied {rule} and learned: {conclusion}"),
            TellReport::AlreadyKnown => {
                format!("applied {rule} but I already know that: {conclusion}")
            }
            TellReport::Rejected => format!("I do not believe that: {conclusion}"),
        },

        InferenceReport::Contradiction => {
            format!("applied {rule} and derived the empty clause: the clauses contradict each other")
        }
    }
}

/// The table as aligned columns, one per variable and a final column for the formula.
fn format_truth_table(table: &TruthTable, heading: &str) -> String {
    let widths = table
        .atoms()
        .iter()
        .map(|atom| atom.chars().count())
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(table.len() + 2);

    let mut header = table
        .atoms()
        .iter()
        .map(|atom| atom.to_string())
        .collect::<Vec<_>>();
    header.push(heading.to_string());
    let header = header.join(" | ");
    lines.push(header.clone());
    lines.push("-".repeat(header.chars().count()));

    for (assignment, value) in table.rows() {
        let mut cells = assignment
            .values()
            .iter()
            .zip(&widths)
            .map(|(value, &width)| format!("{:<width$}", *value as u8))
            .collect::<Vec<_>>();
        cells.push((*value as u8).to_string());
        lines.push(cells.join(" | "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(context: &mut Context, line: &str) -> String {
        match handle_message(context, line) {
            Reply::Message(message) | Reply::Error(message) => message,
            other => panic!("expected some text, found {other:?}"),
        }
    }

    #[test]
    fn tell_and_ask() {
        let mut ctx = Context::default();

        assert_eq!(reply(&mut ctx, "tell: p implies q"), "I've learned something new");
        assert_eq!(reply(&mut ctx, "tell: p"), "I've learned something new");
        assert_eq!(reply(&mut ctx, "tell: p"), "I already know that");
        assert_eq!(reply(&mut ctx, "tell: not q"), "I do not believe that");

        assert_eq!(reply(&mut ctx, "ask: q"), "Yes");
        assert_eq!(reply(&mut ctx, "ask: not p"), "No");
        assert_eq!(reply(&mut ctx, "ask: r"), "I do not know");
    }

    #[test]
    fn list() {
        let mut ctx = Context::default();
        assert_eq!(reply(&mut ctx, "list kb"), "Knowledge base is empty.");

        reply(&mut ctx, "tell: p implies q");
        reply(&mut ctx, "tell: r and s");
        assert_eq!(reply(&mut ctx, "list_kb"), "1. p => q\n2. r & s");
        assert_eq!(reply(&mut ctx, "LIST KB"), "1. p => q\n2. r & s");
    }

    #[test]
    fn to_cnf() {
        let mut ctx = Context::default();
        assert_eq!(
            reply(&mut ctx, "to_cnf: c iff not r"),
            "original formula: c <=> ~r\nconverted to CNF: (c | r) & (~c | ~r)"
        );
    }

    #[test]
    fn truth_table() {
        let mut ctx = Context::default();
        assert_eq!(
            reply(&mut ctx, "truth_table: p implies q"),
            "p | q | p implies q
-------------------
0 | 0 | 1
0 | 1 | 1
1 | 0 | 0
1 | 1 | 1"
        );
    }

    #[test]
    fn truth_table_alignment() {
        let mut ctx = Context::default();
        let table = reply(&mut ctx, "truth_table: rain or p");
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "rain | p | rain or p");
        assert_eq!(lines[2], "0    | 0 | 0");
        assert_eq!(lines[5], "1    | 1 | 1");
    }

    #[test]
    fn truth_table_alignment_by_character() {
        let mut ctx = Context::default();
        let table = reply(&mut ctx, "truth_table: été or p");
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "été | p | été or p");
        assert_eq!(lines[1], "-".repeat(18));
        assert_eq!(lines[2], "0   | 0 | 0");
        assert_eq!(lines[4], "1   | 0 | 1");
    }

    #[test]
    fn modus_ponens() {
        let mut ctx = Context::default();

        assert_eq!(
            reply(&mut ctx, "modus_ponens: p; p implies q"),
            "applied modus ponens and learned: q"
        );
        assert_eq!(
            reply(&mut ctx, "modus_ponens: p; p implies q"),
            "applied modus ponens but I already know that: q"
        );
        assert_eq!(
            reply(&mut ctx, "modus_ponens: r; r implies not q"),
            "I do not believe that: ~q"
        );
        assert_eq!(
            reply(&mut ctx, "modus_ponens: r; p implies q"),
            "Error: premise r does not match implication antecedent p"
        );
        assert_eq!(
            reply(&mut ctx, "modus_ponens: p"),
            "Error: modus_ponens expects two formulas separated by ';'"
        );
    }

    #[test]
    fn resolution() {
        let mut ctx = Context::default();

        assert_eq!(
            reply(&mut ctx, "resolution: p or q; not p or r"),
            "applied resolution and learned: q | r"
        );
        assert_eq!(
            reply(&mut ctx, "resolution: p or q; not p or r"),
            "applied resolution but I already know that: q | r"
        );
        assert_eq!(
            reply(&mut ctx, "resolution: p or q; r or s"),
            "Error: no complementary literals found; resolution not applicable"
        );
        assert_eq!(
            reply(&mut ctx, "resolution: p; not p"),
            "applied resolution and derived the empty clause: the clauses contradict each other"
        );
    }

    #[test]
    fn errors() {
        let mut ctx = Context::default();

        assert_eq!(
            handle_message(&mut ctx, "tell: p and"),
            Reply::Error("Error: syntax error: unexpected end of formula".to_string())
        );
        assert_eq!(
            handle_message(&mut ctx, "ask: p ^ q"),
            Reply::Error("Error: syntax error: invalid character '^' at 2".to_string())
        );
        assert_eq!(reply(&mut ctx, "list kb"), "Knowledge base is empty.");
    }

    #[test]
    fn session() {
        let mut ctx = Context::default();

        assert_eq!(handle_message(&mut ctx, "   "), Reply::Silent);
        assert_eq!(handle_message(&mut ctx, "exit"), Reply::Goodbye);
        assert_eq!(handle_message(&mut ctx, "quit"), Reply::Goodbye);
        assert_eq!(reply(&mut ctx, "help"), HELP);
        assert_eq!(reply(&mut ctx, "dance"), UNKNOWN);
        assert_eq!(reply(&mut ctx, "dance: p"), UNKNOWN);
    }
}
