mod corpus;
mod run;

pub use run::run;
