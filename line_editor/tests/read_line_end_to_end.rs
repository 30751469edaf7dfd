// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drive [`LineEditor::read_line()`] through [`TerminalMock`], the same way a user at a
//! real terminal would.

use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use r3bl_line_editor::{KeyEvent, LineEditor, LineEditorConfig, ReadlineEvent,
                       TerminalError, TracingConfig,
                       test_fixtures::{MockInput, TerminalMock, TerminalOp}};
use std::io;

fn keys(codes: &[KeyCode]) -> Vec<MockInput> {
    codes.iter().map(|code| MockInput::from(*code)).collect()
}

#[test]
fn test_edit_and_commit() {
    let mut term = TerminalMock::typing(
        80,
        "abc",
        keys(&[KeyCode::Left, KeyCode::Left, KeyCode::Backspace, KeyCode::End, KeyCode::Enter]),
    );
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();

    assert_eq!(event, ReadlineEvent::Line("bc".to_string()));
    assert_eq!(editor.line_state.cursor(), 2);
    assert_eq!(editor.history.iter().collect::<Vec<_>>(), vec!["bc"]);
    assert!(term.output().starts_with("> "));
    assert!(term.output().ends_with('\n'));
    assert!(term.intercept_flags.iter().all(|it| *it));
}

#[test]
fn test_prompt_is_painted_before_any_key() {
    let mut term = TerminalMock::with_width(80).with_cursor_row(4);
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "name? ").unwrap();

    assert_eq!(event, ReadlineEvent::Eof);
    assert_eq!(term.ops[0], TerminalOp::SetCursorPosition { col: 0, row: 4 });
    assert_eq!(term.ops[1], TerminalOp::Write("name? ".to_string()));
    assert_eq!(term.ops[2], TerminalOp::SetCursorPosition { col: 6, row: 4 });
}

#[test]
fn test_shorter_line_erases_leftovers() {
    let mut term = TerminalMock::typing(80, &"x".repeat(20), keys(&[KeyCode::Esc]));
    term.push_inputs("short".chars().map(MockInput::from));
    term.push_inputs(keys(&[KeyCode::Enter]));
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "").unwrap();

    assert_eq!(event.into_line().as_deref(), Some("short"));
    let last_paint = term
        .ops
        .iter()
        .rev()
        .find_map(|op| match op {
            TerminalOp::Write(text) => Some(text.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_paint, format!("short{}", " ".repeat(15)));
    assert_eq!(editor.geometry.unwrap().max_printed_length, 20);
}

#[test]
fn test_wrapped_cursor_position() {
    let mut term = TerminalMock::typing(10, &"y".repeat(23), keys(&[])).with_cursor_row(3);
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();

    assert_eq!(event, ReadlineEvent::Eof);
    // The last move before the end of input is for cursor 23 behind a 2 char prompt.
    let moves = term.cursor_moves();
    assert_eq!(moves.last(), Some(&(5, 5)));
}

#[test]
fn test_history_across_calls() {
    let mut term = TerminalMock::typing(80, "one", keys(&[KeyCode::Enter]));
    term.push_inputs("two".chars().map(MockInput::from));
    term.push_inputs(keys(&[KeyCode::Enter, KeyCode::Up, KeyCode::Up, KeyCode::Enter]));
    let mut editor = LineEditor::default();

    assert_eq!(editor.read_line(&mut term, "> ").unwrap(), ReadlineEvent::Line("one".into()));
    assert_eq!(editor.read_line(&mut term, "> ").unwrap(), ReadlineEvent::Line("two".into()));
    assert_eq!(editor.read_line(&mut term, "> ").unwrap(), ReadlineEvent::Line("one".into()));

    assert_eq!(editor.history.iter().collect::<Vec<_>>(), vec!["one", "two", "one"]);
}

#[test]
fn test_repeated_line_is_stored_once() {
    let mut term = TerminalMock::typing(80, "ls", keys(&[KeyCode::Enter]));
    term.push_inputs("ls".chars().map(MockInput::from));
    term.push_inputs(keys(&[KeyCode::Enter]));
    let mut editor = LineEditor::default();

    editor.read_line(&mut term, "$ ").unwrap();
    editor.read_line(&mut term, "$ ").unwrap();

    assert_eq!(editor.history.len(), 1);
}

#[test]
fn test_empty_lines_and_history_config() {
    let mut term = TerminalMock::new(80, keys(&[KeyCode::Enter, KeyCode::Enter]));
    let mut editor = LineEditor::new(LineEditorConfig::default().add_empty_lines_to_history(false));
    assert_eq!(editor.read_line(&mut term, "> ").unwrap(), ReadlineEvent::Line(String::new()));
    assert!(editor.history.is_empty());

    editor.config.add_empty_lines_to_history = true;
    editor.read_line(&mut term, "> ").unwrap();
    assert_eq!(editor.history.iter().collect::<Vec<_>>(), vec![""]);
}

#[test]
fn test_history_capacity() {
    let mut term = TerminalMock::with_width(80);
    for it in 0..51 {
        term.push_inputs(it.to_string().chars().map(MockInput::from));
        term.push_inputs(keys(&[KeyCode::Enter]));
    }
    let mut editor = LineEditor::default();
    for _ in 0..51 {
        editor.read_line(&mut term, "> ").unwrap();
    }

    assert_eq!(editor.history.len(), 50);
    assert_eq!(editor.history.iter().next(), Some("1"));

    editor.set_max_history(10);
    assert_eq!(editor.history.len(), 10);
    assert_eq!(editor.history.iter().next(), Some("41"));
}

#[test]
fn test_tab_inserts_spaces() {
    let mut term = TerminalMock::typing(80, "a", keys(&[KeyCode::Tab]));
    term.push_inputs([MockInput::from('b'), MockInput::from(KeyCode::Enter)]);
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();

    assert_eq!(event, ReadlineEvent::Line("a    b".to_string()));
}

#[test]
fn test_altgr_characters_are_inserted() {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let mut term = TerminalMock::typing(80, "a", [
        MockInput::from(KeyEvent::new(KeyCode::Char('@'), altgr)),
        MockInput::from(KeyEvent::with_character('€', KeyCode::Char('e'), altgr)),
        MockInput::from('b'),
        MockInput::from(KeyCode::Enter),
    ]);
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();

    assert_eq!(event, ReadlineEvent::Line("a@€b".to_string()));
}

#[test]
fn test_commit_from_start_of_wrapped_line() {
    let mut term =
        TerminalMock::typing(10, &"y".repeat(23), keys(&[KeyCode::Home, KeyCode::Enter]))
            .with_cursor_row(3);
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();

    assert_eq!(event, ReadlineEvent::Line("y".repeat(23)));
    assert_eq!(editor.line_state.cursor(), 23);
    // The newline is written from the end of the last painted row, not from row 3.
    let newline_at = term
        .ops
        .iter()
        .position(|op| *op == TerminalOp::WriteLine(String::new()))
        .unwrap();
    assert_eq!(term.ops[newline_at - 1], TerminalOp::SetCursorPosition { col: 5, row: 5 });
}

#[test]
fn test_end_of_input_discards_partial_line() {
    let mut term = TerminalMock::typing(80, "partial", keys(&[]));
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();

    assert_eq!(event, ReadlineEvent::Eof);
    assert!(editor.history.is_empty());
    assert!(editor.line_state.is_empty());
    assert_eq!(term.ops.iter().rev().nth(1), Some(&TerminalOp::WriteLine(String::new())));
}

#[test]
fn test_read_failure_is_an_error() {
    let mut term = TerminalMock::typing(80, "ab", [
        MockInput::Fail(io::ErrorKind::BrokenPipe),
        MockInput::from(KeyCode::Enter),
    ]);
    let mut editor = LineEditor::default();

    let result = editor.read_line(&mut term, "> ");

    assert!(matches!(result, Err(TerminalError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(editor.history.is_empty());
}

#[test]
fn test_write_failure_is_an_error() {
    let mut term = TerminalMock::typing(80, "ab", keys(&[KeyCode::Enter]));
    term.write_error = Some(io::ErrorKind::Other);
    let mut editor = LineEditor::default();

    assert!(matches!(editor.read_line(&mut term, "> "), Err(TerminalError::Io(_))));
    assert!(editor.history.is_empty());
}

#[test]
fn test_zero_width_is_an_error() {
    let mut term = TerminalMock::typing(0, "a", keys(&[]));
    let mut editor = LineEditor::default();

    assert!(matches!(editor.read_line(&mut term, "> "), Err(TerminalError::ZeroWidth)));
}

#[test]
fn test_resize_recomputes_first_row() {
    let mut term = TerminalMock::typing(10, &"y".repeat(15), [MockInput::Resize(5), MockInput::from('z')])
        .with_cursor_row(5);
    let mut editor = LineEditor::default();

    let event = editor.read_line(&mut term, "> ").unwrap();
    assert_eq!(event, ReadlineEvent::Eof);

    // Before the resize the cursor sat at offset 17 on row 5 + 17 / 10 = 6. After it,
    // the line is assumed to start 17 / 5 = 3 rows above that.
    let geometry = editor.geometry.unwrap();
    assert_eq!(geometry.buffer_width(), 5);
    assert_eq!(geometry.first_row, 3);
    // 'z' puts the cursor at offset 18: row 3 + 18 / 5, col 18 % 5.
    let last_paint_move = term
        .ops
        .iter()
        .rev()
        .filter_map(|op| match op {
            TerminalOp::SetCursorPosition { col, row } => Some((*col, *row)),
            _ => None,
        })
        .next();
    assert_eq!(last_paint_move, Some((3, 6)));
}

#[test]
fn test_commit_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("end_to_end.log");
    let guard = TracingConfig::new_file(Some(file_path.to_str().unwrap().to_string()))
        .install_thread_local()
        .unwrap();

    let mut term = TerminalMock::typing(80, "logged", keys(&[KeyCode::Enter]));
    LineEditor::default().read_line(&mut term, "> ").unwrap();
    drop(guard);

    let contents = std::fs::read_to_string(&file_path).unwrap();
    assert!(contents.contains("line committed"), "{contents}");
}
