//! Plain-text layout of a chart report.

use std::fmt::Write;

use sizhu_rs::{ChartReport, PillarAnnotation};

fn annotation_line(label: &str, a: &PillarAnnotation) -> String {
    let element = a.nayin.element.map_or("", |e| e.label());
    let stars = a.stars.labels().join("");
    format!(
        "{label} {}  {}{}  {}({})  {}  {}",
        a.pillar,
        a.nayin.nayin,
        if element.is_empty() { String::new() } else { format!("[{element}]") },
        a.life_stage.stage,
        a.life_stage.level.label(),
        a.taisui,
        stars,
    )
    .trim_end()
    .to_string()
}

pub fn chart_report(report: &ChartReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &ChartReport) -> std::fmt::Result {
    if let Some(moment) = &report.moment {
        writeln!(out, "出生: {moment}")?;
    }
    if let Some(lunar) = &report.lunar {
        writeln!(out, "农历: {lunar}")?;
    }
    writeln!(out, "四柱: {}", report.chart)?;
    if let Some(precision) = report.precision {
        writeln!(out, "精度: {}", precision.name())?;
    }
    if let Some(reason) = &report.fallback_reason {
        writeln!(out, "备注: {reason}")?;
    }

    writeln!(out)?;
    let p = &report.pillars;
    for (label, a) in [("年柱", &p.year), ("月柱", &p.month), ("日柱", &p.day), ("时柱", &p.hour)] {
        writeln!(out, "{}", annotation_line(label, a))?;
    }

    if let Some(palaces) = &report.palaces {
        writeln!(out)?;
        for (label, a) in [("命宫", &palaces.life), ("身宫", &palaces.body), ("胎元", &palaces.fetal)] {
            writeln!(out, "{}", annotation_line(label, a))?;
        }
    }

    if let Some(timeline) = &report.jieqi {
        writeln!(out)?;
        for line in timeline.describe() {
            writeln!(out, "{line}")?;
        }
    }

    if let Some(fortune) = &report.fortune {
        writeln!(out)?;
        writeln!(
            out,
            "大运{}: {}",
            fortune.direction.label(),
            fortune.qiyun.description()
        )?;
        for step in &fortune.dayun {
            writeln!(
                out,
                "  {:>2}. {}  {}-{}岁  {}年起",
                step.ordinal, step.pillar, step.start_age, step.end_age, step.start_year
            )?;
        }
        if !fortune.liunian.is_empty() {
            writeln!(out, "流年:")?;
            for year in &fortune.liunian {
                writeln!(out, "  {} {}  {}岁", year.year, year.pillar, year.age)?;
            }
        }
    }
    Ok(())
}
