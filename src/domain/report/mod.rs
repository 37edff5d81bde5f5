//! Report Module - Export payload and its Markdown rendering.

mod markdown;
mod payload;

pub use payload::{
    AssessmentReport, ReportCategory, ReportCompetitor, ReportIot, ReportStrategy, ReportSwot,
};

/// Fully evaluated assessment used by report and export tests.
#[cfg(test)]
pub(crate) fn sample_state() -> crate::domain::assessment::AssessmentState {
    use crate::domain::assessment::{AssessmentState, RespondentProfile};
    use crate::domain::competitive::{CompetitiveComparator, EntityRatings};
    use crate::domain::foundation::{CategoryValues, RatingScale};
    use crate::domain::scoring::{IotReadiness, Scorecard};
    use crate::domain::strategy::StrategyEvaluation;

    let uniform = |v| CategoryValues::new(v, v, v, v, v);
    let profile = RespondentProfile::new("Sam", "Acme", "Logistics", "Egypt", true).unwrap();
    let state = AssessmentState::start(profile).with_scores(
        Scorecard::from_averages(
            CategoryValues::new(4.0, 7.0 / 3.0, 5.0, 1.5, 3.0),
            RatingScale::Likert,
        ),
        IotReadiness::from_ratings([3, 3, 4, 4]),
        "Two plants",
    );
    let factors = state.default_factors().unwrap();
    let cpm = CompetitiveComparator::compare(
        &uniform(0.2),
        &[
            EntityRatings::new("Acme", uniform(3.2)),
            EntityRatings::new("Rival", uniform(4.1)),
        ],
    )
    .unwrap();
    state
        .with_strategy(StrategyEvaluation::evaluate(factors))
        .with_competitive(cpm)
}
