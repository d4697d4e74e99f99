//! The questionnaire pages around the report: landing hero and the two
//! slider questions.

mod flow;
mod hero;
mod household;
mod housing;

pub use flow::Page;
pub use hero::HeroPage;
pub use household::{
    HOUSEHOLD_IMAGES, HouseholdImage, HouseholdPage, MAX_HOUSEHOLD, MIN_HOUSEHOLD, household_image,
    household_label,
};
pub use housing::{HOUSING_TYPES, HousingPage, housing_label};
