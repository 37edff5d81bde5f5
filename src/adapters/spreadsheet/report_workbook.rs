//! Multi-sheet xlsx rendering of an assessment report.

use umya_spreadsheet::Spreadsheet;

use crate::domain::report::AssessmentReport;

use super::table::{workbook_bytes, write_table, CellValue};

pub const SHEET_SCORES: &str = "Scores";
pub const SHEET_SWOT: &str = "SWOT";
pub const SHEET_IFE_EFE: &str = "IFE_EFE";
pub const SHEET_IE: &str = "IE";
pub const SHEET_BCG: &str = "BCG";
pub const SHEET_CPM: &str = "CPM";

/// Builds the workbook for `report`.
pub fn build_workbook(report: &AssessmentReport) -> Result<Spreadsheet, String> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    let scores: Vec<Vec<CellValue>> = report
        .categories
        .iter()
        .map(|c| vec![c.label.clone().into(), c.average.into(), c.tier.label().into()])
        .chain(std::iter::once(vec![
            "Overall".into(),
            report.overall.into(),
            "".into(),
        ]))
        .chain(std::iter::once(vec![
            "IoT".into(),
            report.iot.average.into(),
            report.iot.band.label().into(),
        ]))
        .collect();
    let sheet = book.new_sheet(SHEET_SCORES)?;
    write_table(sheet, &["Phase", "Average", "Tier"], &scores);

    let swot = &report.swot;
    let groups = [
        ("Strength", &swot.strengths),
        ("Weakness", &swot.weaknesses),
        ("Opportunity", &swot.opportunities),
        ("Threat", &swot.threats),
    ];
    let swot_rows: Vec<Vec<CellValue>> = groups
        .iter()
        .flat_map(|(group, items)| {
            items
                .iter()
                .map(move |item| vec![CellValue::from(*group), CellValue::from(item.clone())])
        })
        .collect();
    let sheet = book.new_sheet(SHEET_SWOT)?;
    write_table(sheet, &["Group", "Item"], &swot_rows);

    let mut factor_rows: Vec<Vec<CellValue>> = Vec::new();
    let mut ie_rows: Vec<Vec<CellValue>> = Vec::new();
    if let Some(strategy) = &report.strategy {
        for (kind, factors) in [
            ("Internal", &strategy.internal_factors),
            ("External", &strategy.external_factors),
        ] {
            for f in factors {
                factor_rows.push(vec![
                    kind.into(),
                    f.label.clone().into(),
                    f.weight.into(),
                    (f.rating as f64).into(),
                    f.weighted_score().into(),
                ]);
            }
        }
        factor_rows.push(vec!["IFE".into(), "".into(), "".into(), "".into(), strategy.ife.into()]);
        factor_rows.push(vec!["EFE".into(), "".into(), "".into(), "".into(), strategy.efe.into()]);
        ie_rows.push(vec![
            strategy.ife.into(),
            strategy.efe.into(),
            strategy.ie_region.clone().into(),
            strategy.ie_strategy.clone().into(),
            strategy.posture.clone().into(),
        ]);
    }
    let sheet = book.new_sheet(SHEET_IFE_EFE)?;
    write_table(sheet, &["Type", "Factor", "Weight", "Rating", "Weighted Score"], &factor_rows);
    let sheet = book.new_sheet(SHEET_IE)?;
    write_table(sheet, &["IFE", "EFE", "IE Region", "Strategy", "Posture"], &ie_rows);

    let bcg_rows: Vec<Vec<CellValue>> = report
        .bcg
        .iter()
        .map(|p| {
            vec![
                p.category.display_name().into(),
                p.x.into(),
                p.y.into(),
                p.quadrant.label().into(),
            ]
        })
        .collect();
    let sheet = book.new_sheet(SHEET_BCG)?;
    write_table(sheet, &["Phase", "Readiness", "IoT", "Quadrant"], &bcg_rows);

    let cpm_rows: Vec<Vec<CellValue>> = report
        .competitive
        .iter()
        .map(|c| {
            vec![
                (c.rank as f64).into(),
                c.name.clone().into(),
                c.score.into(),
                c.band.label().into(),
            ]
        })
        .collect();
    let sheet = book.new_sheet(SHEET_CPM)?;
    write_table(sheet, &["Rank", "Company", "CPM Score", "Band"], &cpm_rows);

    Ok(book)
}

/// Renders `report` as xlsx bytes.
pub fn report_workbook_bytes(report: &AssessmentReport) -> Result<Vec<u8>, String> {
    let book = build_workbook(report)?;
    workbook_bytes(&book).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::spreadsheet::table::read_table;
    use crate::domain::report::sample_state;

    fn workbook() -> Spreadsheet {
        build_workbook(&AssessmentReport::build(&sample_state()).unwrap()).unwrap()
    }

    #[test]
    fn workbook_has_one_sheet_per_analysis() {
        let book = workbook();
        for name in [SHEET_SCORES, SHEET_SWOT, SHEET_IFE_EFE, SHEET_IE, SHEET_BCG, SHEET_CPM] {
            assert!(book.get_sheet_by_name(name).is_some(), "missing sheet {}", name);
        }
    }

    #[test]
    fn scores_sheet_lists_phases_then_totals() {
        let book = workbook();
        let rows = read_table(book.get_sheet_by_name(SHEET_SCORES).unwrap());
        let phases: Vec<String> = rows.iter().map(|r| r.text("Phase")).collect();
        assert_eq!(phases, ["Plan", "Source", "Make", "Deliver", "Return", "Overall", "IoT"]);
        let source = rows.iter().nth(1).unwrap();
        assert_eq!(source.number("Average"), Some(2.33));
        assert_eq!(source.text("Tier"), "Weak");
    }

    #[test]
    fn cpm_sheet_is_ranked() {
        let book = workbook();
        let rows = read_table(book.get_sheet_by_name(SHEET_CPM).unwrap());
        let first = rows.iter().next().unwrap();
        assert_eq!(first.text("Company"), "Rival");
        assert_eq!(first.number("Rank"), Some(1.0));
    }

    #[test]
    fn workbook_serializes_to_zip_bytes() {
        let bytes = report_workbook_bytes(&AssessmentReport::build(&sample_state()).unwrap()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
