//! Per-pillar annotations attached to a chart.
//!
//! Life stages are measured against the month branch (得令), taisui spirits
//! against the year branch, and auxiliary stars against the day stem and
//! year branch. Palaces are annotated exactly like the four pillars.

use serde::Serialize;

use crate::life_stage::{LifeStageInfo, life_stage_info};
use crate::nayin::{NayinInfo, nayin_info};
use crate::palace::{Palaces, palaces};
use crate::pillar::{FourPillarChart, Pillar};
use crate::stars::{AuxiliaryStars, auxiliary_stars};
use crate::taisui::{TaisuiSpirit, taisui_spirit};

/// One pillar with every derived attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarAnnotation {
    pub pillar: Pillar,
    pub nayin: NayinInfo,
    /// Stem's life stage at the chart's month branch.
    pub life_stage: LifeStageInfo,
    /// Spirit of the pillar's branch relative to the year branch.
    pub taisui: TaisuiSpirit,
    pub stars: AuxiliaryStars,
}

/// Annotate `pillar` in the context of `chart`.
pub fn annotate_pillar(pillar: Pillar, chart: &FourPillarChart) -> PillarAnnotation {
    let month_branch = chart.month.branch();
    let year_branch = chart.year.branch();
    PillarAnnotation {
        pillar,
        nayin: nayin_info(pillar),
        life_stage: life_stage_info(pillar.stem(), month_branch),
        taisui: taisui_spirit(year_branch, pillar.branch()),
        stars: auxiliary_stars(chart.day.stem(), year_branch, pillar.branch()),
    }
}

/// The four pillars, annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnotatedChart {
    pub year: PillarAnnotation,
    pub month: PillarAnnotation,
    pub day: PillarAnnotation,
    pub hour: PillarAnnotation,
}

pub fn annotate_chart(chart: &FourPillarChart) -> AnnotatedChart {
    AnnotatedChart {
        year: annotate_pillar(chart.year, chart),
        month: annotate_pillar(chart.month, chart),
        day: annotate_pillar(chart.day, chart),
        hour: annotate_pillar(chart.hour, chart),
    }
}

/// The three palaces, annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnotatedPalaces {
    pub life: PillarAnnotation,
    pub body: PillarAnnotation,
    pub fetal: PillarAnnotation,
}

pub fn annotate_palaces(chart: &FourPillarChart) -> AnnotatedPalaces {
    let Palaces { life, body, fetal } = palaces(chart);
    AnnotatedPalaces {
        life: annotate_pillar(life, chart),
        body: annotate_pillar(body, chart),
        fetal: annotate_pillar(fetal, chart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life_stage::LifeStage;

    #[test]
    fn chart_2000_01_01_noon() {
        let chart: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
        let a = annotate_chart(&chart);
        assert_eq!(a.year.nayin.nayin.name(), "城头土");
        assert_eq!(a.day.nayin.nayin.name(), "天上火");
        // 戊 at 子 (month branch) is 胎
        assert_eq!(a.day.life_stage.stage, LifeStage::Tai);
        // 午 against 卯 year: (6 - 3) = 3 → 太阴
        assert_eq!(a.day.taisui.name(), "太阴");
        assert_eq!(a.year.taisui.name(), "太岁");
        // 戊 day: 羊刃 at 午
        assert!(a.hour.stars.yangren);
    }

    #[test]
    fn palaces_are_annotated() {
        let chart: FourPillarChart = "己卯 丙子 戊午 戊午".parse().unwrap();
        let p = annotate_palaces(&chart);
        assert_eq!(p.life.pillar.to_string(), "壬申");
        assert_eq!(p.life.nayin.nayin.name(), "剑锋金");
    }
}
