/*!
The context: a reasoning session, to which formulas are told and of which formulas are asked.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [oracle](crate::oracle) used to decide satisfiability.
A [Context] is a generic context with the library oracle, and is built from a config alone.

Each context exclusively owns its knowledge base, and so independent sessions are independent contexts.

# Example
```rust
# use ponens::config::Config;
# use ponens::context::Context;
# use ponens::reports::{AskReport, TellReport};
let mut the_context = Context::from_config(Config::default());

assert_eq!(the_context.tell_str("p implies q"), Ok(TellReport::Learned));
assert_eq!(the_context.tell_str("p"), Ok(TellReport::Learned));
assert_eq!(the_context.tell_str("not q"), Ok(TellReport::Rejected));

assert_eq!(the_context.ask_str("q"), Ok(AskReport::Entails));
assert_eq!(the_context.ask_str("not p"), Ok(AskReport::Contradicts));
assert_eq!(the_context.ask_str("r"), Ok(AskReport::Undecided));

assert_eq!(the_context.formulas().len(), 2);
```
*/

mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
