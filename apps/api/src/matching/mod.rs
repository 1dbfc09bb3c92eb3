// Job-description matching against the fixed skill vocabulary.

pub mod skill_match;
