//! Built-in workout templates and starter tasks.

use progress_core::model::{
    ExerciseDefinition, Task, TaskError, TaskId, Template, TemplateError, TemplateId,
};

type ExerciseRow = (&'static str, u32, &'static str);

const UPPER_A: &[ExerciseRow] = &[
    ("Supino Inclinado (halter)", 2, "8-12"),
    ("Voador", 3, "8-12"),
    ("Puxada Alta", 3, "8-12"),
    ("Remada Máquina", 3, "8-12"),
    ("Desenvolvimento c/ Halteres", 3, "8-12"),
    ("Tríceps pulley", 3, "8-12"),
    ("Rosca direta", 3, "8-12"),
];

const LOWER_A: &[ExerciseRow] = &[
    ("Hack", 4, "8-12"),
    ("Extensora", 3, "10-15"),
    ("Cadeira flexora", 3, "12-15"),
    ("mesa flexora", 4, "15-20"),
    ("adutora", 4, "15-20"),
];

const UPPER_B: &[ExerciseRow] = &[
    ("Remada Maquina", 4, "8-12"),
    ("Supino reto", 3, "8-12"),
    ("puxada alta", 4, "8-12"),
    ("Elevação Lateral", 4, "8-12"),
    ("triceps francês", 4, "8-12"),
    ("Rosca scott", 3, "8-12"),
];

const LOWER_B: &[ExerciseRow] = &[
    ("leg pres", 3, "5-8"),
    ("stiff", 3, "10-15"),
    ("mesa flexora", 3, "10-12"),
    ("cadeira extensora", 4, "15-20"),
    ("adutora", 4, "15-20"),
];

const TEMPLATES: &[(&str, &str, &str, &[ExerciseRow])] = &[
    ("a", "Upper A", "(A)", UPPER_A),
    ("b", "Lower A", "(B)", LOWER_A),
    ("c", "Upper B", "(C)", UPPER_B),
    ("d", "Lower B", "(D)", LOWER_B),
];

const TASKS: &[(u64, &str, bool)] = &[
    (1, "Comprar Whey Protein", false),
    (2, "Revisar aula de Hooks", true),
    (3, "Pagar boleto da academia", false),
];

/// The four-day upper/lower split shipped with the app.
///
/// # Errors
///
/// Returns `TemplateError` if a built-in row fails validation.
pub fn builtin_templates() -> Result<Vec<Template>, TemplateError> {
    TEMPLATES
        .iter()
        .map(|(id, name, tag, rows)| {
            let exercises = rows
                .iter()
                .map(|(ex, sets, reps)| ExerciseDefinition::new(*ex, *sets, *reps))
                .collect::<Result<Vec<_>, _>>()?;
            Template::new(TemplateId::new(*id), *name, *tag, exercises)
        })
        .collect()
}

/// Starter to-do list.
///
/// # Errors
///
/// Returns `TaskError` if a built-in row fails validation.
pub fn sample_tasks() -> Result<Vec<Task>, TaskError> {
    TASKS
        .iter()
        .map(|(id, description, done)| Task::from_persisted(TaskId::new(*id), *description, *done))
        .collect()
}
