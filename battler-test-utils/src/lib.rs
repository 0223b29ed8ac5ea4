mod report_assert;
mod test_replay_builder;

pub use report_assert::{
    assert_deaths_eq,
    assert_kills_eq,
};
pub use test_replay_builder::TestReplayBuilder;
