use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dropforge_core::cohort::Cohort;
use dropforge_core::config::ScoreWeights;
use dropforge_core::models::StatBlock;
use dropforge_core::ranking::RankedEntry;
use dropforge_core::scorer::ScoreResult;
use dropforge_core::stats::MapDropStats;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn score_report(stats: &StatBlock, w: &ScoreWeights, result: &ScoreResult) {
    let b = &result.breakdown;
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Input"),
        Cell::new("Value").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Effective ATK"),
        Cell::new(format!(
            "{:.0} + {:.0} x {}",
            stats.attack, stats.special_attack, w.special_attack_to_attack
        )),
        Cell::new(format!("{:.0}", b.effective_attack)),
    ]);
    table.add_row(vec![
        Cell::new("Back multiplier"),
        Cell::new(format!(
            "{:.2}% x {}",
            stats.back_attack_damage_pct, w.back_attack_weight
        )),
        Cell::new(format!("{:.4}", b.back_multiplier)),
    ]);
    table.add_row(vec![
        Cell::new("Crit multiplier"),
        Cell::new(format!(
            "{:.2}% (cap {}) x {:.2}% x {}",
            stats.crit_chance_pct, w.crit_chance_cap_pct, stats.crit_damage_pct, w.crit_weight
        )),
        Cell::new(format!("{:.4}", b.crit_expected_multiplier)),
    ]);
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format!("crit used {:.2}%", b.crit_chance_capped_pct)),
        Cell::new(format!("{:.0}", result.score))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);

    align_right(&mut table, 2..=2);
    println!("\n{}", table);
}

pub fn leaderboard(cohort: Cohort, entries: &[RankedEntry]) {
    println!("\n🏆 === {} === 🏆", cohort.title());
    if entries.is_empty() {
        println!("   (no entries)");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Character"),
        Cell::new("ATK"),
        Cell::new("Crit%"),
        Cell::new("CritDmg%"),
        Cell::new("SpATK"),
        Cell::new("Back%"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for (i, e) in entries.iter().enumerate() {
        let s = &e.entry.stats;
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&e.entry.name).add_attribute(Attribute::Bold),
            Cell::new(e.entry.character.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.0}", s.attack)),
            Cell::new(format!("{:.2}", s.crit_chance_pct)),
            Cell::new(format!("{:.2}", s.crit_damage_pct)),
            Cell::new(format!("{:.0}", s.special_attack)),
            Cell::new(format!("{:.2}", s.back_attack_damage_pct)),
            Cell::new(format!("{:.0}", e.score)).fg(Color::Cyan),
        ]);
    }

    align_right(&mut table, 3..=8);
    println!("{}", table);
}

pub fn drop_table(stats: &MapDropStats) {
    println!(
        "\n🗺️  {} ({}) | {} runs, {} with drops",
        stats.map_name, stats.map_id, stats.total_runs, stats.runs_with_any_drop
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Item").add_attribute(Attribute::Bold),
        Cell::new("Rarity"),
        Cell::new("Runs"),
        Cell::new("Drop %").fg(Color::Cyan),
        Cell::new("Qty"),
        Cell::new("Avg"),
    ]);

    for s in &stats.items {
        let rate = Cell::new(format!("{:.2}", s.drop_rate));
        // Highlight the most frequent drop.
        let rate = if s.drop_rate > 0.0 && s.drop_rate == stats.max_drop_rate {
            rate.fg(Color::Green)
        } else {
            rate
        };

        table.add_row(vec![
            Cell::new(&s.item.name),
            Cell::new(s.item.rarity.as_deref().unwrap_or("-")),
            Cell::new(s.runs_with_item),
            rate,
            Cell::new(format!("{:.0}", s.qty_total)),
            Cell::new(format!("{:.2}", s.avg_qty)),
        ]);
    }

    align_right(&mut table, 2..=5);
    println!("{}", table);
}
