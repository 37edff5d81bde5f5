//! Markdown rendering of an assessment report.
//!
//! Sections are generated independently and concatenated; HTML and PDF
//! exports are produced from this text.

use crate::domain::foundation::RatingScale;

use super::AssessmentReport;

impl AssessmentReport {
    /// Renders the full report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut doc = String::new();
        doc.push_str(&self.header_section());
        doc.push_str(&self.scores_section());
        doc.push_str(&self.swot_section());
        doc.push_str(&self.strategy_section());
        doc.push_str(&self.bcg_section());
        doc.push_str(&self.competitive_section());
        doc.push_str(&self.recommendations_section());
        doc
    }

    fn header_section(&self) -> String {
        let r = &self.respondent;
        let mut section = String::from("# SCOR Readiness Report\n\n");
        section.push_str(&format!("**Company:** {}\n\n", r.company));
        if !r.name.is_empty() {
            section.push_str(&format!("**Respondent:** {}\n\n", r.name));
        }
        if !r.sector.is_empty() || !r.country.is_empty() {
            section.push_str(&format!("**Sector / Country:** {} / {}\n\n", r.sector, r.country));
        }
        section.push_str(&format!("**Generated:** {}\n\n", self.generated_at.to_sheet_string()));
        if !self.notes.is_empty() {
            section.push_str(&format!("> {}\n\n", self.notes));
        }
        section
    }

    fn scores_section(&self) -> String {
        let max = match self.scale {
            RatingScale::Likert => "5",
            RatingScale::Percent => "100",
        };
        let mut section = String::from("## 1. SCOR Scores\n\n");
        section.push_str("| Phase | Average | Tier |\n");
        section.push_str("|-------|---------|------|\n");
        for c in &self.categories {
            section.push_str(&format!("| {} | {:.2} / {} | {} |\n", c.label, c.average, max, c.tier));
        }
        section.push('\n');
        section.push_str(&format!("**Overall:** {:.2} / {}\n\n", self.overall, max));
        section.push_str(&format!(
            "**IoT readiness:** {:.2} / 5 ({})\n\n",
            self.iot.average, self.iot.band
        ));
        section
    }

    fn swot_section(&self) -> String {
        let mut section = String::from("## 2. SWOT\n\n");
        let groups = [
            ("Strengths", &self.swot.strengths),
            ("Weaknesses", &self.swot.weaknesses),
            ("Opportunities", &self.swot.opportunities),
            ("Threats", &self.swot.threats),
        ];
        for (title, items) in groups {
            section.push_str(&format!("### {}\n", title));
            if items.is_empty() {
                section.push_str("- None\n");
            } else {
                for item in items {
                    section.push_str(&format!("- {}\n", item));
                }
            }
            section.push('\n');
        }
        section
    }

    fn strategy_section(&self) -> String {
        let mut section = String::from("## 3. Strategic Position\n\n");
        match &self.strategy {
            Some(s) => {
                section.push_str(&format!("**IFE:** {:.2} | **EFE:** {:.2}\n\n", s.ife, s.efe));
                section.push_str(&format!("**Posture:** {}\n\n", s.posture));
                section.push_str(&format!(
                    "**IE Matrix Region:** {} ({})\n\n",
                    s.ie_region, s.ie_strategy
                ));
            }
            None => section.push_str("*Not yet evaluated*\n\n"),
        }
        section
    }

    fn bcg_section(&self) -> String {
        let mut section = String::from("## 4. BCG Matrix\n\n");
        section.push_str("| Phase | Readiness (X) | IoT (Y) | Quadrant |\n");
        section.push_str("|-------|---------------|---------|----------|\n");
        for p in &self.bcg {
            section.push_str(&format!(
                "| {} | {:.2} | {:.2} | {} |\n",
                p.category, p.x, p.y, p.quadrant
            ));
        }
        section.push('\n');
        section
    }

    fn competitive_section(&self) -> String {
        let mut section = String::from("## 5. Competitive Profile\n\n");
        if self.competitive.is_empty() {
            section.push_str("*No comparison run*\n\n");
            return section;
        }
        section.push_str("| Rank | Company | CPM Score | Band |\n");
        section.push_str("|------|---------|-----------|------|\n");
        for c in &self.competitive {
            section.push_str(&format!("| {} | {} | {:.2} | {} |\n", c.rank, c.name, c.score, c.band));
        }
        section.push('\n');
        section
    }

    fn recommendations_section(&self) -> String {
        let recs = &self.recommendations;
        let mut section = String::from("## 6. Recommendations\n\n");
        for c in &recs.categories {
            section.push_str(&format!("- **{}** ({}): {}\n", c.category, c.tier, c.text));
        }
        section.push('\n');

        if let Some(iot) = &recs.iot {
            section.push_str(&format!("**IoT:** {}\n\n", iot));
        }

        for advice in &recs.swot {
            section.push_str(&format!(
                "- **{}:** {}\n  - {}\n",
                advice.group,
                advice.members.join(", "),
                advice.advice
            ));
        }
        if !recs.swot.is_empty() {
            section.push('\n');
        }

        for c in &recs.competitive {
            section.push_str(&format!("- **{}** ({:.2}): {}\n", c.name, c.score, c.text));
        }
        if let Some(msg) = &recs.leader_message {
            section.push_str(&format!("\n{}\n", msg));
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::report::{sample_state, AssessmentReport};

    #[test]
    fn markdown_has_all_sections() {
        let md = AssessmentReport::build(&sample_state()).unwrap().to_markdown();
        for heading in [
            "# SCOR Readiness Report",
            "## 1. SCOR Scores",
            "## 2. SWOT",
            "## 3. Strategic Position",
            "## 4. BCG Matrix",
            "## 5. Competitive Profile",
            "## 6. Recommendations",
        ] {
            assert!(md.contains(heading), "missing {}", heading);
        }
    }

    #[test]
    fn markdown_lists_scores_and_region() {
        let md = AssessmentReport::build(&sample_state()).unwrap().to_markdown();
        assert!(md.contains("| Source | 2.33 / 5 | Weak |"));
        assert!(md.contains("**IE Matrix Region:** IX (Exit) (Harvest/Exit)"));
        assert!(md.contains("| 1 | Rival | 4.10 | Strong |"));
        assert!(md.contains("> Two plants"));
    }

    #[test]
    fn empty_threats_render_placeholder() {
        let md = AssessmentReport::build(&sample_state()).unwrap().to_markdown();
        assert!(md.contains("### Threats\n- None\n"));
    }
}
