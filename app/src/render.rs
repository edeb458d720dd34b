//! FILENAME: app/src/render.rs
// PURPOSE: Turns pages into text tables or pretty JSON.

use std::io::Write;

use dataset::MedalLabel;
use query_engine::{AthletePhysique, CrossTab, MedalTally, TallyGrouping, YearCount};

use crate::cli::OutputFormat;
use crate::views::{AthletesPage, CountryPage, MedalTallyPage, OptionsPage, OverviewPage, Page};
use crate::AppError;

/// Writes a page in the requested format.
pub fn render<W: Write>(page: &Page, format: OutputFormat, out: &mut W) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, page)?;
            writeln!(out)?;
        }
        OutputFormat::Text => render_text(page, out)?,
    }
    Ok(())
}

pub fn render_text<W: Write>(page: &Page, out: &mut W) -> std::io::Result<()> {
    match page {
        Page::Tally(p) => tally_text(p, out),
        Page::Overview(p) => overview_text(p, out),
        Page::Country(p) => country_text(p, out),
        Page::Athletes(p) => athletes_text(p, out),
        Page::Options(p) => options_text(p, out),
    }
}

/// Empty-state line shown in place of a country's sport heatmap.
pub fn empty_heatmap_message(region: &str) -> String {
    format!("No data available to display heatmap for {}.", region)
}

// ============================================================================
// TABLE HELPERS
// ============================================================================

/// Writes a left-aligned first column and right-aligned remaining columns.
fn write_table<W: Write>(out: &mut W, headers: &[String], rows: &[Vec<String>]) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = w)
                } else {
                    format!("{:>width$}", cell, width = w)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    writeln!(out, "{}", line(headers).trim_end())?;
    let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(out, "{}", "-".repeat(rule))?;
    for row in rows {
        writeln!(out, "{}", line(row).trim_end())?;
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", "=".repeat(text.chars().count()))
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn series_table<W: Write>(out: &mut W, value: &str, series: &[YearCount]) -> std::io::Result<()> {
    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|p| vec![p.year.to_string(), p.count.to_string()])
        .collect();
    write_table(out, &headers(&["Year", value]), &rows)
}

fn cross_tab_table<W: Write>(out: &mut W, corner: &str, table: &CrossTab) -> std::io::Result<()> {
    let mut head = vec![corner.to_string()];
    head.extend(table.years.iter().map(|y| y.to_string()));
    let rows: Vec<Vec<String>> = table
        .row_labels
        .iter()
        .zip(&table.cells)
        .map(|(label, cells)| {
            let mut row = vec![label.clone()];
            row.extend(cells.iter().map(|c| c.to_string()));
            row
        })
        .collect();
    write_table(out, &head, &rows)
}

fn medal_tally_table<W: Write>(out: &mut W, tally: &MedalTally) -> std::io::Result<()> {
    let key = match tally.grouping {
        TallyGrouping::Region => "Region",
        TallyGrouping::Year => "Year",
    };
    let rows: Vec<Vec<String>> = tally
        .rows
        .iter()
        .map(|r| {
            vec![
                r.key.to_string(),
                r.gold.to_string(),
                r.silver.to_string(),
                r.bronze.to_string(),
                r.total.to_string(),
            ]
        })
        .collect();
    write_table(out, &headers(&[key, "Gold", "Silver", "Bronze", "Total"]), &rows)
}

/// Count, min, median and max of an age sample. `-` for an empty sample.
fn age_summary(label: &str, ages: &[f64]) -> Vec<String> {
    let mut sorted = ages.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let fmt = |v: Option<&f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v));
    let median = if sorted.is_empty() {
        None
    } else if sorted.len() % 2 == 1 {
        Some(sorted[sorted.len() / 2])
    } else {
        let mid = sorted.len() / 2;
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    };
    vec![
        label.to_string(),
        sorted.len().to_string(),
        fmt(sorted.first()),
        fmt(median.as_ref()),
        fmt(sorted.last()),
    ]
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Per medal label: athlete count and mean height/weight of those measured.
fn physique_summary(rows: &[AthletePhysique]) -> Vec<Vec<String>> {
    let labels = [MedalLabel::Gold, MedalLabel::Silver, MedalLabel::Bronze, MedalLabel::NoMedal];
    labels
        .iter()
        .map(|label| {
            let group: Vec<&AthletePhysique> = rows.iter().filter(|r| r.medal == *label).collect();
            let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v));
            vec![
                label.to_string(),
                group.len().to_string(),
                fmt(mean(group.iter().filter_map(|r| r.height))),
                fmt(mean(group.iter().filter_map(|r| r.weight))),
            ]
        })
        .collect()
}

// ============================================================================
// PAGES
// ============================================================================

fn tally_text<W: Write>(page: &MedalTallyPage, out: &mut W) -> std::io::Result<()> {
    heading(out, &page.title)?;
    if page.tally.is_empty() {
        return writeln!(out, "No medals for this selection.");
    }
    medal_tally_table(out, &page.tally)
}

fn overview_text<W: Write>(page: &OverviewPage, out: &mut W) -> std::io::Result<()> {
    let s = &page.stats;
    heading(out, "Top Statistics")?;
    let rows = vec![
        vec!["Editions".to_string(), s.editions.to_string()],
        vec!["Host Cities".to_string(), s.host_cities.to_string()],
        vec!["Sports".to_string(), s.sports.to_string()],
        vec!["Events".to_string(), s.events.to_string()],
        vec!["Nations".to_string(), s.nations.to_string()],
        vec!["Athletes".to_string(), s.athletes.to_string()],
    ];
    write_table(out, &headers(&["Metric", "Value"]), &rows)?;

    heading(out, "Participating Nations Over the Years")?;
    series_table(out, "Nations", &page.nations_over_time)?;
    heading(out, "Events Over the Years")?;
    series_table(out, "Events", &page.events_over_time)?;
    heading(out, "Athletes Over the Years")?;
    series_table(out, "Athletes", &page.athletes_over_time)?;

    heading(out, "Events Distribution by Sport & Year")?;
    cross_tab_table(out, "Sport", &page.events_heatmap)?;

    heading(out, &format!("Most Successful Athletes ({})", page.sport))?;
    let rows: Vec<Vec<String>> = page
        .top_athletes
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.medals.to_string(),
                a.sport.clone(),
                a.region.clone().unwrap_or_default(),
            ]
        })
        .collect();
    write_table(out, &headers(&["Name", "Medals", "Sport", "Region"]), &rows)
}

fn country_text<W: Write>(page: &CountryPage, out: &mut W) -> std::io::Result<()> {
    heading(out, &format!("{} - Medal Tally Over the Years", page.region))?;
    series_table(out, "Medals", &page.medals_over_time)?;

    heading(out, &format!("{} Performance by Sport", page.region))?;
    match &page.heatmap {
        Some(table) => cross_tab_table(out, "Sport", table)?,
        None => writeln!(out, "{}", empty_heatmap_message(&page.region))?,
    }

    heading(out, &format!("Top 10 Athletes of {}", page.region))?;
    let rows: Vec<Vec<String>> = page
        .top_athletes
        .iter()
        .map(|a| vec![a.name.clone(), a.medals.to_string(), a.sport.clone()])
        .collect();
    write_table(out, &headers(&["Name", "Medals", "Sport"]), &rows)
}

fn athletes_text<W: Write>(page: &AthletesPage, out: &mut W) -> std::io::Result<()> {
    let age_headers = headers(&["Group", "Count", "Min", "Median", "Max"]);

    heading(out, "Age Distribution of Athletes")?;
    let rows = vec![
        age_summary("Overall Age", &page.ages.overall),
        age_summary("Gold Medalists", &page.ages.gold),
        age_summary("Silver Medalists", &page.ages.silver),
        age_summary("Bronze Medalists", &page.ages.bronze),
    ];
    write_table(out, &age_headers, &rows)?;

    heading(out, "Age Distribution of Gold Medalists by Sport")?;
    let rows: Vec<Vec<String>> = page
        .gold_ages_by_sport
        .iter()
        .map(|s| age_summary(&s.sport, &s.ages))
        .collect();
    write_table(out, &age_headers, &rows)?;

    heading(out, &format!("Height vs Weight Analysis ({})", page.sport))?;
    write_table(
        out,
        &headers(&["Medal", "Athletes", "Mean Height", "Mean Weight"]),
        &physique_summary(&page.physique),
    )?;

    heading(out, "Male vs Female Participation Over the Years")?;
    let rows: Vec<Vec<String>> = page
        .sex_participation
        .iter()
        .map(|p| vec![p.year.to_string(), p.male.to_string(), p.female.to_string()])
        .collect();
    write_table(out, &headers(&["Year", "Male", "Female"]), &rows)
}

fn options_text<W: Write>(page: &OptionsPage, out: &mut W) -> std::io::Result<()> {
    let join = |items: Vec<String>| items.join(", ");
    heading(out, "Years")?;
    writeln!(out, "{}", join(page.years.iter().map(|y| y.to_string()).collect()))?;
    heading(out, "Countries")?;
    writeln!(out, "{}", join(page.countries.iter().map(|c| c.to_string()).collect()))?;
    heading(out, "Sports")?;
    writeln!(out, "{}", join(page.sports.iter().map(|s| s.to_string()).collect()))
}
