//! Justify-the-misdeed role-play setups.
//!
//! One player argues the villain's side; the other plays the interviewer and
//! looks for holes in the story. The misdeeds are deliberately petty.

/// Petty-crime setups.
pub static CRIMINAL_TEMPLATE: [&str; 10] = [
    "You ate the last slice of cake that had someone else's name on it. Explain why it was the right thing to do.",
    "You borrowed a neighbor's bicycle without asking and returned it a week later. Justify yourself.",
    "You took every free sample at the supermarket, twice. Defend your actions.",
    "You kept the extra change the cashier gave you by mistake. Convince us it was fair.",
    "You picked the flowers from the park to give to a friend. Explain your reasoning.",
    "You used a coworker's mug because yours was dirty. Argue that this was justified.",
    "You read the last chapter of a friend's mystery novel before they finished it. Defend yourself.",
    "You skipped the queue at the ticket machine. Make the case that it was necessary.",
    "You switched the TV channel in the middle of someone else's show. Justify your choice.",
    "You 'forgot' to return a library book for three years. Explain why nobody should be upset.",
];

/// Unreasonable-complaint setups.
pub static COMPLAINER_TEMPLATE: [&str; 10] = [
    "You are demanding a refund because the ice cream was too cold. Make your case to the manager.",
    "You are complaining that the hotel sea view had too much sea. Argue for compensation.",
    "You want a discount because the restaurant music did not match your mood. Convince the staff.",
    "You are upset that the rain ruined your picnic and blame the park office. State your complaint.",
    "You insist the bookshop should refund a novel because the ending was sad. Argue your point.",
    "You are complaining that the gym made you tired. Demand an apology.",
    "You want the cinema to refund your ticket because the film was too long. Make your case.",
    "You are upset that the bakery sold out of bread before you woke up. Argue they owe you.",
    "You demand the airline change the clouds blocking your window view. Present your complaint.",
    "You want a free meal because the menu had too many choices. Convince the restaurant.",
];
