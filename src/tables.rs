use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        assessment::Assessment,
        profile::{IntensityProfile, N_HOURS},
        ranking::RankingTable,
        zone::Zone,
    },
    fmt::FormattedPercentage,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

pub fn build_ranking_table(ranking: &RankingTable) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Company", "Score", "Away from best", "Away from worst"]);
    for (index, score) in ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Dim),
            Cell::new(&score.company),
            Cell::new(format!("{:.3}", score.score))
                .set_alignment(CellAlignment::Right)
                .fg(if score.score <= 0.5 { Color::Green } else { Color::Red }),
            Cell::new(FormattedPercentage(score.percent_away_from_best))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(score.percent_away_from_worst))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_assessments_table(assessments: &[Assessment]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Company", "Demand", "Actual", "Best case", "Worst case", "Hours"]);
    for assessment in assessments {
        table.add_row(vec![
            Cell::new(&assessment.score.company),
            Cell::new(assessment.demand).set_alignment(CellAlignment::Right),
            Cell::new(assessment.emissions.total).set_alignment(CellAlignment::Right),
            Cell::new(assessment.scenarios.best_case)
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
            Cell::new(assessment.scenarios.worst_case)
                .set_alignment(CellAlignment::Right)
                .fg(Color::Red),
            // Partial bounds do not cover the whole demand:
            Cell::new(assessment.scenarios.n_hours).set_alignment(CellAlignment::Right).fg(
                if assessment.scenarios.is_partial() { Color::DarkYellow } else { Color::Reset },
            ),
        ]);
    }
    table
}

pub fn build_hourly_emissions_table(assessments: &[Assessment]) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("Hour")];
    header.extend(assessments.iter().map(|assessment| Cell::new(&assessment.score.company)));
    table.set_header(header);
    for hour in 0..N_HOURS {
        let mut row = vec![Cell::new(format!("{hour:02}:00")).add_attribute(Attribute::Dim)];
        row.extend(assessments.iter().map(|assessment| {
            assessment.emissions.hourly.get(hour).map_or_else(
                || Cell::new("-").add_attribute(Attribute::Dim),
                |emissions| Cell::new(emissions).set_alignment(CellAlignment::Right),
            )
        }));
        table.add_row(row);
    }
    table
}

pub fn build_intensities_table(zones: &[(Zone, IntensityProfile)]) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("Hour")];
    header.extend(zones.iter().map(|(zone, _)| Cell::new(zone)));
    table.set_header(header);
    for hour in 0..N_HOURS {
        let mut row = vec![Cell::new(format!("{hour:02}:00")).add_attribute(Attribute::Dim)];
        row.extend(zones.iter().map(|(_, profile)| {
            profile.get(hour).map_or_else(
                || Cell::new("-").add_attribute(Attribute::Dim),
                |intensity| Cell::new(intensity).set_alignment(CellAlignment::Right),
            )
        }));
        table.add_row(row);
    }
    table
}
