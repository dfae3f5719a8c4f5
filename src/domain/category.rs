//! Closed value sets for the categorical form fields and the one-hot table built from them.
//!
//! Feature names follow the `<Field>_<Value>` convention of the dummy-encoded
//! `heart_2020_cleaned` training columns, e.g. `AgeCategory_80 or older`.

use std::fmt;

/// A closed set of accepted values for one categorical field.
pub trait Category: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// The exact text submitted by the form and used in the feature name.
    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    Yes,
    No,
}

impl Category for YesNo {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Category for Sex {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeCategory {
    From18To24,
    From25To29,
    From30To34,
    From35To39,
    From40To44,
    From45To49,
    From50To54,
    From55To59,
    From60To64,
    From65To69,
    From70To74,
    From75To79,
    EightyOrOlder,
}

impl Category for AgeCategory {
    const ALL: &'static [Self] = &[
        Self::From18To24,
        Self::From25To29,
        Self::From30To34,
        Self::From35To39,
        Self::From40To44,
        Self::From45To49,
        Self::From50To54,
        Self::From55To59,
        Self::From60To64,
        Self::From65To69,
        Self::From70To74,
        Self::From75To79,
        Self::EightyOrOlder,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To29 => "25-29",
            Self::From30To34 => "30-34",
            Self::From35To39 => "35-39",
            Self::From40To44 => "40-44",
            Self::From45To49 => "45-49",
            Self::From50To54 => "50-54",
            Self::From55To59 => "55-59",
            Self::From60To64 => "60-64",
            Self::From65To69 => "65-69",
            Self::From70To74 => "70-74",
            Self::From75To79 => "75-79",
            Self::EightyOrOlder => "80 or older",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
    White,
    Black,
    Asian,
    AmericanIndianAlaskanNative,
    Hispanic,
    Other,
}

impl Category for Race {
    const ALL: &'static [Self] = &[
        Self::White,
        Self::Black,
        Self::Asian,
        Self::AmericanIndianAlaskanNative,
        Self::Hispanic,
        Self::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Asian => "Asian",
            Self::AmericanIndianAlaskanNative => "American Indian/Alaskan Native",
            Self::Hispanic => "Hispanic",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diabetic {
    Yes,
    No,
    NoBorderline,
    YesDuringPregnancy,
}

impl Category for Diabetic {
    const ALL: &'static [Self] = &[
        Self::Yes,
        Self::No,
        Self::NoBorderline,
        Self::YesDuringPregnancy,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NoBorderline => "No, borderline diabetes",
            Self::YesDuringPregnancy => "Yes (during pregnancy)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenHealth {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Category for GenHealth {
    const ALL: &'static [Self] = &[
        Self::Excellent,
        Self::VeryGood,
        Self::Good,
        Self::Fair,
        Self::Poor,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

fn labels_of<C: Category>() -> Vec<&'static str> {
    C::ALL.iter().map(|c| c.label()).collect()
}

/// The four free-form numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Bmi,
    PhysicalHealth,
    MentalHealth,
    SleepTime,
}

impl NumericField {
    pub const ALL: [Self; 4] = [
        Self::Bmi,
        Self::PhysicalHealth,
        Self::MentalHealth,
        Self::SleepTime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bmi => "BMI",
            Self::PhysicalHealth => "PhysicalHealth",
            Self::MentalHealth => "MentalHealth",
            Self::SleepTime => "SleepTime",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Bmi => "Body mass index",
            Self::PhysicalHealth => "Days of poor physical health (last 30 days)",
            Self::MentalHealth => "Days of poor mental health (last 30 days)",
            Self::SleepTime => "Average hours of sleep per night",
        }
    }

    /// HTML `step` attribute for the input.
    pub fn step(self) -> &'static str {
        match self {
            Self::Bmi => "0.01",
            Self::SleepTime => "any",
            Self::PhysicalHealth | Self::MentalHealth => "1",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The thirteen one-hot encoded fields, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoricalField {
    Smoking,
    AlcoholDrinking,
    Stroke,
    DiffWalking,
    Sex,
    AgeCategory,
    Race,
    Diabetic,
    PhysicalActivity,
    GenHealth,
    Asthma,
    KidneyDisease,
    SkinCancer,
}

impl CategoricalField {
    pub const ALL: [Self; 13] = [
        Self::Smoking,
        Self::AlcoholDrinking,
        Self::Stroke,
        Self::DiffWalking,
        Self::Sex,
        Self::AgeCategory,
        Self::Race,
        Self::Diabetic,
        Self::PhysicalActivity,
        Self::GenHealth,
        Self::Asthma,
        Self::KidneyDisease,
        Self::SkinCancer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Smoking => "Smoking",
            Self::AlcoholDrinking => "AlcoholDrinking",
            Self::Stroke => "Stroke",
            Self::DiffWalking => "DiffWalking",
            Self::Sex => "Sex",
            Self::AgeCategory => "AgeCategory",
            Self::Race => "Race",
            Self::Diabetic => "Diabetic",
            Self::PhysicalActivity => "PhysicalActivity",
            Self::GenHealth => "GenHealth",
            Self::Asthma => "Asthma",
            Self::KidneyDisease => "KidneyDisease",
            Self::SkinCancer => "SkinCancer",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Smoking => "Have you smoked at least 100 cigarettes in your life?",
            Self::AlcoholDrinking => "Heavy drinker?",
            Self::Stroke => "Ever had a stroke?",
            Self::DiffWalking => "Serious difficulty walking or climbing stairs?",
            Self::Sex => "Sex",
            Self::AgeCategory => "Age category",
            Self::Race => "Race / ethnicity",
            Self::Diabetic => "Ever told you had diabetes?",
            Self::PhysicalActivity => "Physical activity in the past 30 days?",
            Self::GenHealth => "General health",
            Self::Asthma => "Ever told you had asthma?",
            Self::KidneyDisease => "Ever told you had kidney disease?",
            Self::SkinCancer => "Ever told you had skin cancer?",
        }
    }

    /// Accepted values, in display order.
    pub fn labels(self) -> Vec<&'static str> {
        match self {
            Self::Sex => labels_of::<Sex>(),
            Self::AgeCategory => labels_of::<AgeCategory>(),
            Self::Race => labels_of::<Race>(),
            Self::Diabetic => labels_of::<Diabetic>(),
            Self::GenHealth => labels_of::<GenHealth>(),
            Self::Smoking
            | Self::AlcoholDrinking
            | Self::Stroke
            | Self::DiffWalking
            | Self::PhysicalActivity
            | Self::Asthma
            | Self::KidneyDisease
            | Self::SkinCancer => labels_of::<YesNo>(),
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted value of a field and the feature it switches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub feature: String,
}

/// Read-only table from (field, accepted value) to one-hot feature name.
///
/// Built once at startup and shared behind an `Arc`; every field of
/// [`CategoricalField::ALL`] has an entry, so lookups only fail for values
/// outside a field's closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMapping {
    entries: Vec<(CategoricalField, Vec<Choice>)>,
}

impl CategoryMapping {
    pub fn standard() -> Self {
        let entries = CategoricalField::ALL
            .iter()
            .map(|&field| {
                let choices = field
                    .labels()
                    .into_iter()
                    .map(|label| Choice {
                        label,
                        feature: format!("{}_{}", field.name(), label),
                    })
                    .collect();
                (field, choices)
            })
            .collect();
        Self { entries }
    }

    pub fn choices(&self, field: CategoricalField) -> &[Choice] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, choices)| choices.as_slice())
            .unwrap_or(&[])
    }

    /// Feature name for `value`, or `None` when the value is not accepted.
    pub fn feature_for(&self, field: CategoricalField, value: &str) -> Option<&str> {
        self.choices(field)
            .iter()
            .find(|c| c.label == value)
            .map(|c| c.feature.as_str())
    }

    /// Every one-hot feature the table can produce.
    pub fn all_features(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, choices)| choices.iter().map(|c| c.feature.as_str()))
    }
}

impl Default for CategoryMapping {
    fn default() -> Self {
        Self::standard()
    }
}
