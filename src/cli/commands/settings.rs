//! Settings command implementation.
//!
//! Loads, edits, and resets the persisted training settings.

use crate::cli::args::{OutputFormat, SetArgs, SettingsCommands};
use crate::error::RepsetError;
use crate::output::{format_settings, to_json};
use crate::workout::{SettingsStore, TrainingSettings};

/// Execute settings subcommands.
///
/// # Errors
///
/// Returns an error if the settings store fails or output formatting fails.
pub fn settings(
    store: &dyn SettingsStore,
    cmd: SettingsCommands,
    format: OutputFormat,
) -> Result<String, RepsetError> {
    match cmd {
        SettingsCommands::Show => show(store, format),
        SettingsCommands::Set(args) => set(store, args, format),
        SettingsCommands::Reset => reset(store, format),
    }
}

/// The saved settings, or defaults when nothing was ever saved.
fn current(store: &dyn SettingsStore) -> Result<TrainingSettings, RepsetError> {
    Ok(store.load()?.unwrap_or_default())
}

fn show(store: &dyn SettingsStore, format: OutputFormat) -> Result<String, RepsetError> {
    let settings = current(store)?;

    match format {
        OutputFormat::Json => to_json(&settings),
        OutputFormat::Pretty => Ok(format_settings(&settings)),
    }
}

fn set(
    store: &dyn SettingsStore,
    args: SetArgs,
    format: OutputFormat,
) -> Result<String, RepsetError> {
    let mut settings = current(store)?;

    if let Some(seconds) = args.exercise_seconds {
        settings.seconds_per_exercise = seconds;
    }
    if let Some(seconds) = args.break_seconds {
        settings.break_seconds = seconds;
    }
    if let Some(sets) = args.sets {
        settings.sets_number = sets;
    }
    if let Some(exercises) = args.exercises {
        settings.exercises_number = match args.exercises_number {
            Some(count) => count,
            None => u32::try_from(exercises.len())
                .map_err(|_| RepsetError::Config("Too many exercises".to_string()))?,
        };
        settings.exercises = exercises;
    } else if let Some(count) = args.exercises_number {
        settings.exercises_number = count;
    }

    settings.normalize();
    store.save(&settings)?;

    // Reload so the output reflects what the store actually persisted.
    let saved = store
        .load()?
        .ok_or_else(|| RepsetError::Storage("Settings missing after save".to_string()))?;

    match format {
        OutputFormat::Json => to_json(&saved),
        OutputFormat::Pretty => Ok(format!("Settings saved.\n\n{}", format_settings(&saved))),
    }
}

fn reset(store: &dyn SettingsStore, format: OutputFormat) -> Result<String, RepsetError> {
    store.clear()?;

    match format {
        OutputFormat::Json => to_json(&TrainingSettings::default()),
        OutputFormat::Pretty => Ok("Settings reset to defaults.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use crate::workout::MockSettingsStore;

    use super::*;

    fn set_args() -> SetArgs {
        SetArgs {
            exercise_seconds: Some(30),
            break_seconds: Some(10),
            sets: Some(3),
            exercises: Some(vec!["A".to_string(), "B".to_string()]),
            exercises_number: Some(3),
        }
    }

    #[test]
    fn test_show_falls_back_to_defaults() {
        let mut store = MockSettingsStore::new();
        store.expect_load().returning(|| Ok(None));

        let output = settings(&store, SettingsCommands::Show, OutputFormat::Json).unwrap();

        let parsed: TrainingSettings = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, TrainingSettings::default());
    }

    #[test]
    fn test_set_normalizes_before_save() {
        let mut store = MockSettingsStore::new();
        let mut seq = Sequence::new();

        store
            .expect_load()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(None));
        store
            .expect_save()
            .withf(|s| {
                s.seconds_per_exercise == 30
                    && s.exercises == vec!["A".to_string(), "B".to_string(), String::new()]
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        store
            .expect_load()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(Some(TrainingSettings {
                    seconds_per_exercise: 30,
                    break_seconds: 10,
                    sets_number: 3,
                    exercises_number: 3,
                    exercises: vec!["A".to_string(), "B".to_string(), String::new()],
                }))
            });

        let output = settings(
            &store,
            SettingsCommands::Set(set_args()),
            OutputFormat::Json,
        )
        .unwrap();

        let parsed: TrainingSettings = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.exercises.len(), 3);
    }

    #[test]
    fn test_set_counts_exercises_when_count_omitted() {
        let mut store = MockSettingsStore::new();

        store.expect_load().returning(|| {
            Ok(Some(TrainingSettings {
                seconds_per_exercise: 30,
                break_seconds: 10,
                sets_number: 3,
                exercises_number: 2,
                exercises: vec!["A".to_string(), "B".to_string()],
            }))
        });
        store
            .expect_save()
            .withf(|s| s.exercises_number == 3 && s.exercises.len() == 3)
            .returning(|_| Ok(()));

        let args = SetArgs {
            exercise_seconds: None,
            break_seconds: None,
            sets: None,
            exercises: Some(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
            ]),
            exercises_number: None,
        };

        settings(&store, SettingsCommands::Set(args), OutputFormat::Json).unwrap();
    }

    #[test]
    fn test_reset_clears_store() {
        let mut store = MockSettingsStore::new();
        store.expect_clear().times(1).returning(|| Ok(()));

        let output = settings(&store, SettingsCommands::Reset, OutputFormat::Pretty).unwrap();

        assert!(output.contains("reset"));
    }

    #[test]
    fn test_save_error_propagates() {
        let mut store = MockSettingsStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .returning(|_| Err(RepsetError::Storage("disk full".to_string())));

        let result = settings(
            &store,
            SettingsCommands::Set(set_args()),
            OutputFormat::Pretty,
        );

        assert!(matches!(result, Err(RepsetError::Storage(_))));
    }
}
