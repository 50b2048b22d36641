//! Property-based invariant tests for the parser and grid state.
//!
//! These tests verify invariants that must hold for any input:
//!
//! 1. Splitting text at any character offset gives the same final state.
//! 2. Splitting bytes at any offset gives the same final state.
//! 3. Arbitrary bytes never panic, and the cursor stays inside the grid.
//! 4. No line grows past the grid width.
//! 5. Plain printable text round-trips through `to_text()`.
//! 6. Printed cells keep the style that was active when they were written.

use proptest::prelude::*;
use termgrid::{AnsiParser, Color, TerminalState};

/// Fragments biased toward the sequences real tools emit, so random inputs
/// exercise every parser state rather than mostly plain text.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .:<>=#-]{1,12}",
        Just("\n".to_string()),
        Just("\r".to_string()),
        Just("\t".to_string()),
        Just("\x08".to_string()),
        Just("\x1b".to_string()),
        Just("\x1b[".to_string()),
        Just("\x1b]0;title\x07".to_string()),
        Just("\x1b[?25l".to_string()),
        Just("\x1b[0m".to_string()),
        (0u16..120).prop_map(|n| format!("\x1b[{}m", n)),
        (0u16..5, prop::sample::select(vec!['A', 'B', 'C', 'D']))
            .prop_map(|(n, f)| format!("\x1b[{}{}", n, f)),
        (0u16..4, prop::sample::select(vec!['J', 'K'])).prop_map(|(n, f)| format!("\x1b[{}{}", n, f)),
        (0u16..30, 0u16..100).prop_map(|(r, c)| format!("\x1b[{};{}H", r, c)),
        "[ -~]{0,4}",
        "\\PC{1,3}",
    ]
}

fn ansi_input() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..40).prop_map(|parts| parts.concat())
}

fn parse_with_width(input: &str, width: usize) -> TerminalState {
    let mut state = TerminalState::with_width(width);
    AnsiParser::new().parse(input, &mut state);
    state
}

fn assert_grid_invariants(state: &TerminalState) -> Result<(), TestCaseError> {
    let cursor = state.cursor();
    prop_assert!(state.line_count() >= 1);
    prop_assert!(cursor.row < state.line_count());
    prop_assert!(cursor.col <= state.width());
    for line in state.visible_lines() {
        prop_assert!(line.len() <= state.width());
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Chunk-boundary invariance (text)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn split_text_matches_single_parse(input in ansi_input(), split in any::<prop::sample::Index>()) {
        let expected = parse_with_width(&input, 20);

        let boundaries: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        let at = boundaries[split.index(boundaries.len())];

        let mut state = TerminalState::with_width(20);
        let mut parser = AnsiParser::new();
        parser.parse(&input[..at], &mut state);
        parser.parse(&input[at..], &mut state);

        prop_assert_eq!(state, expected);
    }

    #[test]
    fn every_split_offset_matches(input in "[a-z\\x1b\\[0-9;mABCDJKH\\n\\r]{0,24}") {
        let expected = parse_with_width(&input, 10);

        for at in 0..=input.len() {
            let mut state = TerminalState::with_width(10);
            let mut parser = AnsiParser::new();
            parser.parse(&input[..at], &mut state);
            parser.parse(&input[at..], &mut state);
            prop_assert_eq!(&state, &expected, "split at {}", at);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Chunk-boundary invariance (bytes)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn byte_chunks_match_text_parse(input in ansi_input(), chunk_size in 1usize..17) {
        let expected = parse_with_width(&input, 20);

        let mut state = TerminalState::with_width(20);
        let mut parser = AnsiParser::new();
        for chunk in input.as_bytes().chunks(chunk_size) {
            parser.parse_bytes(chunk, &mut state);
        }

        prop_assert_eq!(state, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Totality and bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..512), width in 1usize..100) {
        let mut state = TerminalState::with_width(width);
        let mut parser = AnsiParser::new();
        parser.parse_bytes(&data, &mut state);

        assert_grid_invariants(&state)?;
    }

    #[test]
    fn structured_input_keeps_cursor_in_bounds(input in ansi_input(), width in 1usize..40) {
        let state = parse_with_width(&input, width);
        assert_grid_invariants(&state)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Plain text round-trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plain_text_round_trips(lines in prop::collection::vec("[!-~]([ -~]{0,60}[!-~])?", 0..10)) {
        let input = lines.join("\n");
        let state = parse_with_width(&input, 80);
        prop_assert_eq!(state.to_text(), input);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Styles are captured at print time
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn later_styles_do_not_touch_printed_cells(fg in 30u16..38, later in prop::collection::vec(0u16..108, 0..8)) {
        let later: Vec<String> = later.iter().map(|n| n.to_string()).collect();
        let input = format!("\x1b[{}mX\x1b[{}mY", fg, later.join(";"));
        let state = parse_with_width(&input, 80);

        let expected = Color::from_index((fg - 30) as u8).unwrap();
        prop_assert_eq!(state.cell(0, 0).unwrap().foreground(), expected);
    }
}
