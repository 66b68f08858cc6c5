//! Headless driver: replays a list of columns and reports each outcome as a
//! line of JSON.

use std::io::Write;

use serde::Serialize;

use crate::error::ScriptError;
use crate::game::{Game, GameStatus, MoveOutcome, Player};

/// One JSON line per drop. The outcome's own fields are inlined.
#[derive(Debug, Serialize)]
struct ScriptLine<'a> {
    turn: usize,
    mover: Player,
    requested_column: usize,
    #[serde(flatten)]
    outcome: &'a MoveOutcome,
}

/// Final line written once the script has been consumed.
#[derive(Debug, Serialize)]
struct Summary {
    moves_played: usize,
    rejected: usize,
    #[serde(flatten)]
    status: GameStatus,
}

/// Drop a piece for every entry of `columns`, writing each outcome to `out`.
///
/// Stops after the first terminal outcome unless `keep_going` is set, in which
/// case later drops are reported as rejected. Returns the outcomes produced.
pub fn play_script<W: Write>(
    game: &mut Game,
    columns: &[usize],
    keep_going: bool,
    mut out: W,
) -> Result<Vec<MoveOutcome>, ScriptError> {
    let mut outcomes = Vec::with_capacity(columns.len());

    for (turn, &column) in columns.iter().enumerate() {
        let player = game.current_player();
        let outcome = game.drop_piece(column);
        let line = ScriptLine {
            turn: turn + 1,
            mover: player,
            requested_column: column,
            outcome: &outcome,
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
        outcomes.push(outcome);

        if outcome.is_terminal() && !keep_going {
            break;
        }
    }

    let summary = Summary {
        moves_played: game.moves_played(),
        rejected: outcomes.iter().filter(|o| o.is_rejected()).count(),
        status: game.status(),
    };
    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;
    out.flush()?;

    Ok(outcomes)
}

/// Parse a comma or whitespace separated list of column indices.
pub fn parse_columns(input: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RejectReason;

    fn lines(buf: &[u8]) -> Vec<serde_json::Value> {
        std::str::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_script_writes_one_line_per_drop() {
        let mut game = Game::new();
        let mut buf = Vec::new();
        let outcomes = play_script(&mut game, &[3, 3, 7], false, &mut buf).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[2],
            MoveOutcome::Rejected {
                reason: RejectReason::ColumnOutOfRange
            }
        );

        let lines = lines(&buf);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["turn"], 1);
        assert_eq!(lines[0]["mover"], "one");
        assert_eq!(lines[0]["column"], 3);
        assert_eq!(lines[0]["outcome"], "placed");
        assert_eq!(lines[1]["row"], 1);
        assert_eq!(lines[2]["requested_column"], 7);
        assert_eq!(lines[2]["reason"], "column_out_of_range");
        assert_eq!(lines[3]["moves_played"], 2);
        assert_eq!(lines[3]["rejected"], 1);
        assert_eq!(lines[3]["status"], "in_progress");
    }

    #[test]
    fn test_script_stops_after_win() {
        let mut game = Game::new();
        let mut buf = Vec::new();
        let outcomes =
            play_script(&mut game, &[0, 6, 1, 6, 2, 6, 3, 4, 4], false, &mut buf).unwrap();

        assert_eq!(outcomes.len(), 7);
        let lines = lines(&buf);
        assert_eq!(lines[6]["outcome"], "won");
        assert_eq!(lines[6]["column"], 3);
        assert_eq!(lines[7]["status"], "won");
        assert_eq!(lines[7]["player"], "one");
    }

    #[test]
    fn test_script_keep_going_reports_rejections() {
        let mut game = Game::new();
        let mut buf = Vec::new();
        let outcomes =
            play_script(&mut game, &[0, 6, 1, 6, 2, 6, 3, 4, 5], true, &mut buf).unwrap();

        assert_eq!(outcomes.len(), 9);
        assert!(outcomes[7].is_rejected() && outcomes[8].is_rejected());
        assert!(!outcomes[6].is_rejected());
        assert_eq!(lines(&buf)[9]["rejected"], 2);

        assert_eq!(
            outcomes[7],
            MoveOutcome::Rejected {
                reason: RejectReason::GameAlreadyOver
            }
        );
    }

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns("3,3, 4 5"), Ok(vec![3, 3, 4, 5]));
        assert_eq!(parse_columns(""), Ok(vec![]));
        assert!(parse_columns("3,x").is_err());
        assert!(parse_columns("-1").is_err());
    }
}
