use super::*;

#[test]
fn string_emitter_collects_fragments() {
    let mut emitter = StringEmitter::with_capacity(16);
    assert!(emitter.is_empty());
    emitter.emit("a");
    emitter.emit_space();
    emitter.emit("+");
    emitter.emit_space();
    emitter.emit("b");
    assert_eq!(emitter.as_str(), "a + b");
    assert_eq!(emitter.len(), 5);
    assert_eq!(emitter.output(), "a + b");
}
