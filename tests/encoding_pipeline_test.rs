use heart_risk::core::{aligner, encoder};
use heart_risk::domain::{CategoricalField, NumericField};
use heart_risk::utils::error::ValidationKind;
use heart_risk::{CategoryMapping, Classifier, LogisticModel, RawInput};

const MODEL_JSON: &str = include_str!("../models/heart_model.json");

fn scenario_input() -> RawInput {
    [
        ("BMI", "28.5"),
        ("PhysicalHealth", "2"),
        ("MentalHealth", "1"),
        ("SleepTime", "7"),
        ("Smoking", "No"),
        ("AlcoholDrinking", "No"),
        ("Stroke", "No"),
        ("DiffWalking", "No"),
        ("Sex", "Male"),
        ("AgeCategory", "50-54"),
        ("Race", "White"),
        ("Diabetic", "No"),
        ("PhysicalActivity", "Yes"),
        ("GenHealth", "Good"),
        ("Asthma", "No"),
        ("KidneyDisease", "No"),
        ("SkinCancer", "No"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_scenario_encodes_and_aligns_to_model_columns() {
    let mapping = CategoryMapping::standard();
    let model = LogisticModel::from_json_str(MODEL_JSON).unwrap();

    let features = encoder::encode(&scenario_input(), &mapping).unwrap();
    for name in [
        "Smoking_No",
        "AlcoholDrinking_No",
        "Stroke_No",
        "DiffWalking_No",
        "Sex_Male",
        "AgeCategory_50-54",
        "Race_White",
        "Diabetic_No",
        "PhysicalActivity_Yes",
        "GenHealth_Good",
        "Asthma_No",
        "KidneyDisease_No",
        "SkinCancer_No",
    ] {
        assert_eq!(features.get(name), 1.0, "{} should be set", name);
    }
    assert_eq!(features.get("BMI"), 28.5);
    assert_eq!(features.get("PhysicalHealth"), 2.0);
    assert_eq!(features.get("MentalHealth"), 1.0);
    assert_eq!(features.get("SleepTime"), 7.0);

    let order = model.feature_names();
    let row = aligner::align(&features, order);
    assert_eq!(row.len(), order.len());

    let position = |name: &str| order.iter().position(|n| n == name).unwrap();
    assert_eq!(row[position("Smoking_Yes")], 0.0);
    assert_eq!(row[position("Smoking_No")], 1.0);
    assert_eq!(row[position("BMI")], 28.5);
    assert_eq!(row[position("AgeCategory_80 or older")], 0.0);

    // 每個欄位只有一個 one-hot 為 1
    let ones = row.iter().filter(|v| **v == 1.0).count();
    assert_eq!(ones, CategoricalField::ALL.len() + 1); // MentalHealth 也是 1
}

#[test]
fn test_sample_model_covers_every_form_feature() {
    let mapping = CategoryMapping::standard();
    let model = LogisticModel::from_json_str(MODEL_JSON).unwrap();
    let names = model.feature_names();

    for field in NumericField::ALL {
        assert!(names.iter().any(|n| n == field.name()));
    }
    for feature in mapping.all_features() {
        assert!(names.iter().any(|n| n == feature), "model lacks {}", feature);
    }
    assert_eq!(names.len(), NumericField::ALL.len() + mapping.all_features().count());
}

#[test]
fn test_every_accepted_value_encodes() {
    let mapping = CategoryMapping::standard();
    for field in CategoricalField::ALL {
        for label in field.labels() {
            let mut input = scenario_input();
            input.insert(field.name(), label);
            let features = encoder::encode(&input, &mapping).unwrap();
            assert_eq!(features.get(&format!("{}_{}", field.name(), label)), 1.0);
        }
    }
}

#[test]
fn test_rejections_name_the_field() {
    let mapping = CategoryMapping::standard();

    let mut input = scenario_input();
    input.insert("Smoking", "Maybe");
    let err = encoder::encode(&input, &mapping).unwrap_err();
    assert_eq!((err.kind, err.field.as_str()), (ValidationKind::InvalidCategory, "Smoking"));

    let mut input = scenario_input();
    input.insert("BMI", "abc");
    let err = encoder::encode(&input, &mapping).unwrap_err();
    assert_eq!((err.kind, err.field.as_str()), (ValidationKind::NonNumeric, "BMI"));
}

#[test]
fn test_encoding_twice_is_identical() {
    let mapping = CategoryMapping::standard();
    let input = scenario_input();
    let first = encoder::encode(&input, &mapping).unwrap();
    let second = encoder::encode(&input, &mapping).unwrap();
    assert_eq!(first, second);
}
