use palestra_domain as domain;

pub fn group_id(id: &str) -> domain::MuscleGroupID {
    domain::MuscleGroupID::new(id).unwrap()
}

pub fn exercise_id(id: &str) -> domain::ExerciseID {
    domain::ExerciseID::new(id).unwrap()
}

pub fn collection() -> domain::Collection {
    domain::Collection::new(vec![
        domain::MuscleGroup {
            id: group_id("chest"),
            title: "Chest".to_string(),
            exercises: vec![EXERCISE.clone(), EXERCISE_2.clone()],
        },
        domain::MuscleGroup {
            id: group_id("legs"),
            title: "Legs".to_string(),
            exercises: vec![],
        },
        domain::MuscleGroup {
            id: group_id("core"),
            title: "Core".to_string(),
            exercises: vec![EXERCISE_3.clone()],
        },
    ])
    .unwrap()
}

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: exercise_id("db_bench"),
        name: domain::Name::new("Dumbbell Bench Press").unwrap(),
        kg: domain::Weight::new(11.0),
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: exercise_id("1718036412345_9f3a6c1be2d4"),
        name: domain::Name::new("Lat Pulldown").unwrap(),
        kg: domain::Weight::new(12.5),
    });

pub static EXERCISE_3: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: exercise_id("plank"),
        name: domain::Name::new("Plank").unwrap(),
        kg: domain::Weight::ZERO,
    });

/// Data as written by the first release of the app.
pub const LEGACY_JSON: &str = r#"[
  {"id":"chest","title":"Chest","exercises":[
    {"id":"db_bench","name":"Dumbbell Bench Press","kg":11.5},
    {"id":"pec_deck","name":"Pec Deck (Machine Fly)","kg":20},
    {"id":"1718036412345_9f3a6c1be2d4","name":"Lat Pulldown","kg":12.5}]},
  {"id":"triceps","title":"Triceps","exercises":[
    {"id":"pushdown","name":"Triceps Pushdown (Machine/Cable)","kg":15},
    {"id":"db_ext","name":"Standing Dumbbell Triceps Extension (Two-Arm)","kg":12.5}]},
  {"id":"back","title":"Back","exercises":[]},
  {"id":"legs","title":"Legs","exercises":[]},
  {"id":"shoulders","title":"Shoulders","exercises":[]},
  {"id":"biceps","title":"Biceps","exercises":[]},
  {"id":"core","title":"Core","exercises":[]}
]"#;
