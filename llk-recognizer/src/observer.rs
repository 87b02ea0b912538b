use crate::parser::Parser;

/// Hooks a recognizer drives as it runs.
///
/// `on_start` fires once, right after construction and before the first
/// `step`. `on_next` fires after every `step`, including the one that
/// reaches `Accept` or `Error`. Implementors that need to distinguish "one
/// more step happened" from "recognition just ended" should check
/// `parser.action().is_terminal()`.
pub trait Observer {
    fn on_start(&mut self, parser: &Parser);
    fn on_next(&mut self, parser: &Parser);
}

/// Runs `parser` to completion, calling `on_start` once and `on_next` after
/// every step. Callers who want to stop early should drive
/// `step`/the observers manually instead of using this helper.
pub fn drive(parser: &mut Parser, observers: &mut [&mut dyn Observer]) {
    for observer in observers.iter_mut() {
        observer.on_start(parser);
    }
    while !parser.is_done() {
        parser.step();
        for observer in observers.iter_mut() {
            observer.on_next(parser);
        }
    }
}
