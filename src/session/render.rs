//! Plain-text board rendering.

use crate::cards::Card;
use crate::core::GameState;
use crate::rules::GameStatus;

const CARD_WIDTH: usize = 5;
const SEP: &str = " ";
const EDGE: &str = "+---+";
const BLANK: &str = "     ";

fn face(card: &Card) -> String {
    if card.hidden {
        "|***|".to_string()
    } else {
        format!("|{:<width$}|", format!("{}{}", card.rank, card.suit), width = CARD_WIDTH - 2)
    }
}

/// Draw the tableau as overlapping boxes, one column per pile.
#[must_use]
pub fn render_tableau(state: &GameState) -> String {
    let columns = state.tableau();
    let max_len = columns.iter().map(|p| p.len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(max_len * 2 + 1);

    for row in 0..max_len {
        let mut top = String::new();
        let mut body = String::new();
        for pile in columns {
            top += if !pile.is_empty() && row <= pile.len() { EDGE } else { BLANK };
            top += SEP;

            match pile.get(row) {
                Some(card) => body += &face(card),
                None => body += BLANK,
            }
            body += SEP;
        }
        lines.push(top);
        lines.push(body);
    }

    let mut bottom = String::new();
    for pile in columns {
        bottom += if max_len > 0 && max_len - 1 < pile.len() { EDGE } else { BLANK };
        bottom += SEP;
    }
    lines.push(bottom);

    lines.join("\n")
}

/// Draw the stock (face-down) and waste top side by side.
#[must_use]
pub fn render_piles(state: &GameState) -> String {
    let has_stock = state.stock_len() > 0;
    let waste_top = state.waste_top();

    (0..3)
        .map(|row| {
            let (stock, waste) = if row % 2 == 0 {
                (
                    (if has_stock { EDGE } else { BLANK }).to_string(),
                    (if waste_top.is_some() { EDGE } else { BLANK }).to_string(),
                )
            } else {
                (
                    (if has_stock { "|***|" } else { BLANK }).to_string(),
                    waste_top.map_or_else(|| BLANK.to_string(), face),
                )
            };
            format!("{}{}{}", stock, SEP, waste)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full screen: score line, column labels, tableau, stock and waste.
#[must_use]
pub fn render(state: &GameState) -> String {
    let labels: Vec<String> = (1..=state.column_count()).map(|i| format!(" |{}| ", i)).collect();

    format!(
        "Score:{}  Stock:{}\n{}\n{}\n{}\n\n--S-- --W--\n{}",
        state.moves(),
        state.stock_len(),
        "-".repeat(state.column_count() * 6),
        labels.join(SEP),
        render_tableau(state),
        render_piles(state),
    )
}

/// Message shown once a game has ended.
#[must_use]
pub fn status_line(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Running => None,
        GameStatus::Won => Some("You've won! Press (R) to play again"),
        GameStatus::Lost => Some("You've lost! Press (R) to play again"),
    }
}
