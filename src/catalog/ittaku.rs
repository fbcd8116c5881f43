//! "Only one answer" topics: each asks for exactly one pick, to be defended.

/// Everyday topics.
pub static ITTAKU_TOPICS: [&str; 20] = [
    "The best rice-ball filling is, without question, ...",
    "If you could eat only one breakfast for the rest of your life, it would be ...",
    "The single greatest invention of all time is ...",
    "The one season worth living for is ...",
    "The best way to spend a rainy Sunday is ...",
    "The one superpower everyone should want is ...",
    "The perfect pizza topping is ...",
    "The only pet worth having is ...",
    "The best decade for music was ...",
    "If you could keep only one app on your phone, it would be ...",
    "The ultimate comfort food is ...",
    "The best place to live is the city, the countryside, or the seaside: pick one.",
    "The most underrated fruit is ...",
    "The one board game everyone should own is ...",
    "The best time of day is ...",
    "The one movie everyone must see is ...",
    "The most useful thing to learn in school is ...",
    "The ideal holiday is spent ...",
    "The best drink to end the day with is ...",
    "The one animal you would most like to be for a day is ...",
];

/// Workplace topics.
pub static ITTAKU_BUSINESS_TOPICS: [&str; 12] = [
    "The single most important skill for a new hire is ...",
    "The best meeting length is ...",
    "The one tool every team should use is ...",
    "The ideal place to work is the office, home, or a café: pick one.",
    "The best way to give feedback is ...",
    "The most valuable habit for staying productive is ...",
    "The one thing that makes a great manager is ...",
    "The best time to schedule deep work is ...",
    "The most effective way to onboard someone is ...",
    "The best team-building activity is ...",
    "The one metric that matters most for a team is ...",
    "The best way to end a project is ...",
];
