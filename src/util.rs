/// Stack growth for deep recursion.
///
/// The parser and the evaluator recurse once per nesting level of the source
/// program. The helper in this module grows the native stack on demand so that
/// the evaluator's call-depth limit, not the operating system, decides when a
/// program recursed too deeply.
pub mod stack;
