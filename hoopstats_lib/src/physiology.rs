//! Minutes-weighted size of the players a team put on the floor.

use serde::Serialize;

use crate::clean::{PlayerLine, RosterEntry};

/// Team minutes in a regulation game (five players, forty minutes).
pub const TOTAL_MINUTES: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Physiology {
    /// Pounds.
    pub weight: f64,
    /// Inches.
    pub height: f64,
}

/// First two whitespace-separated tokens of a boxscore name.
fn name_prefix(name: &str) -> String {
    name.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

fn roster_averages(roster: &[RosterEntry]) -> Physiology {
    if roster.is_empty() {
        tracing::warn!("Empty roster; player averages default to 0");
        return Physiology {
            weight: 0.0,
            height: 0.0,
        };
    }
    let n = roster.len() as f64;
    Physiology {
        weight: roster.iter().filter_map(|e| e.weight).sum::<f64>() / n,
        height: roster.iter().map(|e| f64::from(e.height)).sum::<f64>() / n,
    }
}

/// Sums each player's height and weight weighted by their share of
/// [`TOTAL_MINUTES`].
///
/// A player is matched to the first roster entry whose name starts with the
/// player's first two name tokens. Unmatched players, and matched ones with
/// no listed weight, count at the roster average.
pub fn physiology(roster: &[RosterEntry], boxscore: &[PlayerLine]) -> Physiology {
    let average = roster_averages(roster);
    let mut total = Physiology {
        weight: 0.0,
        height: 0.0,
    };

    for line in boxscore {
        let share = line.mp / TOTAL_MINUTES;
        let prefix = name_prefix(&line.name);
        match roster.iter().find(|e| e.name.starts_with(&prefix)) {
            Some(entry) => {
                total.weight += share * entry.weight.unwrap_or(average.weight);
                total.height += share * f64::from(entry.height);
            }
            None => {
                tracing::warn!(
                    "Player {} was not in roster. Using averages: {:.0} lbs, {:.0} in",
                    prefix,
                    average.weight,
                    average.height
                );
                total.weight += share * average.weight;
                total.height += share * average.height;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, height: u32, weight: f64) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            number: 0,
            year: 1.0,
            position: "G".to_string(),
            height,
            weight: Some(weight),
            ppg: 0.0,
            rpg: 0.0,
            apg: 0.0,
        }
    }

    fn line(name: &str, mp: f64) -> PlayerLine {
        PlayerLine {
            name: name.to_string(),
            mp,
            fg: 0,
            fga: 0,
            two_p: 0,
            two_pa: 0,
            three_p: 0,
            three_pa: 0,
            ft: 0,
            fta: 0,
            orb: 0,
            drb: 0,
            ast: 0,
            stl: 0,
            blk: 0,
            tov: 0,
            pf: 0,
            pts: 0,
        }
    }

    #[test]
    fn weights_by_minutes_played() {
        let roster = vec![
            entry("Marvin Bagley III", 83, 234.0),
            entry("Grayson Allen", 77, 198.0),
        ];
        let boxscore = vec![line("Marvin Bagley", 40.0), line("Grayson Allen", 20.0)];
        let p = physiology(&roster, &boxscore);
        assert!((p.height - (0.2 * 83.0 + 0.1 * 77.0)).abs() < 1e-9);
        assert!((p.weight - (0.2 * 234.0 + 0.1 * 198.0)).abs() < 1e-9);
    }

    #[test]
    fn unmatched_player_uses_roster_average() {
        let roster = vec![entry("A One", 80, 200.0), entry("B Two", 76, 180.0)];
        let boxscore = vec![line("Walk On", 100.0)];
        let p = physiology(&roster, &boxscore);
        assert!((p.height - 39.0).abs() < 1e-9);
        assert!((p.weight - 95.0).abs() < 1e-9);
    }

    #[test]
    fn empty_roster_counts_as_zero() {
        let p = physiology(&[], &[line("Nobody Here", 30.0)]);
        assert_eq!(p, Physiology { weight: 0.0, height: 0.0 });
    }
}
