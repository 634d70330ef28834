mod tables;

pub use self::tables::{
    drop_table as print_drop_table, leaderboard as print_leaderboard,
    score_report as print_score_report,
};
