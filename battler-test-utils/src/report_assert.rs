use battler_kills::{
    KillReport,
    SideId,
};

/// Asserts that the kills credited to a side are equal to the given `(species, direct, passive)`
/// entries.
///
/// Victims are not compared.
#[track_caller]
pub fn assert_kills_eq(report: &KillReport, side: SideId, want: &[(&str, u64, u64)]) {
    let got = report
        .side(side)
        .kills
        .iter()
        .map(|(species, record)| (species.as_str(), record.direct, record.passive))
        .collect::<Vec<_>>();
    let mut want = want.to_vec();
    want.sort();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts that the deaths suffered by a side are equal to the given `(species, count)` entries.
#[track_caller]
pub fn assert_deaths_eq(report: &KillReport, side: SideId, want: &[(&str, u64)]) {
    let got = report
        .side(side)
        .deaths
        .iter()
        .map(|(species, count)| (species.as_str(), *count))
        .collect::<Vec<_>>();
    let mut want = want.to_vec();
    want.sort();
    pretty_assertions::assert_eq!(got, want)
}
