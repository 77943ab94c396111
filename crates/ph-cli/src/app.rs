use crate::{
    CliError, CliResult, Prompt, StdoutClipboard, commands::Commands,
    cover_commands::CoverCommands, custom_commands::CustomCommands,
    experience_commands::ExperienceCommands, profile_commands::ProfileCommands,
};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use ph_cache::{FileCache, LocalCache};
use ph_client::{Client, RecordStore, SeedSource, seed_source_for};
use ph_config::Config;
use ph_controller::{
    Clipboard, ControllerError, CustomAttributesController, ExperienceController, NoticeBoard,
    NoticeDurations, ProfileController,
};
use ph_core::{
    EXPORT_FILE_NAME, Experience, ExperienceDraft, Notice, NoticeLevel, ProfileField,
};
use serde_json::{Value, json};

const DELETE_QUESTION: &str = "Are you sure you want to delete this experience?";
const RESET_QUESTION: &str =
    "Are you sure you want to reset all experiences to the original data? This cannot be undone.";

/// Wires controllers to their collaborators and runs one command.
///
/// Each command gets fresh controllers; their notices are collected here so
/// the caller can print them after the result.
pub struct App {
    store: Arc<dyn RecordStore>,
    seed: Arc<dyn SeedSource>,
    cache: Arc<dyn LocalCache>,
    clipboard: Arc<dyn Clipboard>,
    durations: NoticeDurations,
    notices: Vec<Notice>,
}

impl App {
    pub fn new(
        store: Arc<dyn RecordStore>,
        seed: Arc<dyn SeedSource>,
        cache: Arc<dyn LocalCache>,
        clipboard: Arc<dyn Clipboard>,
        durations: NoticeDurations,
    ) -> Self {
        Self {
            store,
            seed,
            cache,
            clipboard,
            durations,
            notices: Vec::new(),
        }
    }

    /// Build the HTTP store, seed source and file cache from configuration.
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let timeout = config.store.timeout();
        let store = Client::with_timeout(&config.store.base_url, timeout)?;
        let seed = seed_source_for(&config.seed.location(), timeout)?;
        let cache = FileCache::new(config.cache_dir());

        Ok(Self::new(
            Arc::new(store),
            seed,
            Arc::new(cache),
            Arc::new(StdoutClipboard),
            NoticeDurations::from(&config.notices),
        ))
    }

    /// Notices raised so far, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Run one command. `Value::Null` means the command already wrote its
    /// output (clipboard copies).
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        command: Commands,
        prompt: &mut Prompt<R, W>,
    ) -> CliResult<Value> {
        match command {
            Commands::Profile { action } => self.profile(action).await,
            Commands::Cover { action } => self.cover(action).await,
            Commands::Custom { action } => self.custom(action).await,
            Commands::Experience { action } => self.experience(action, prompt).await,
        }
    }

    async fn profile(&mut self, action: ProfileCommands) -> CliResult<Value> {
        let mut controller = ProfileController::new(self.store.clone(), self.board());
        let result = self.profile_action(&mut controller, action).await;
        self.collect(controller.notices_mut());
        result
    }

    async fn profile_action(
        &self,
        controller: &mut ProfileController,
        action: ProfileCommands,
    ) -> CliResult<Value> {
        controller.load().await?;

        let updates = match action {
            ProfileCommands::Show => return Ok(serde_json::to_value(controller.profile())?),
            ProfileCommands::Copy { field } => {
                controller.copy(field, self.clipboard.as_ref())?;
                return Ok(Value::Null);
            }
            ProfileCommands::Set { field, value } => vec![(field, value)],
            update @ ProfileCommands::Update { .. } => update.updates(),
        };

        if updates.is_empty() {
            return Err(CliError::input("no profile fields given"));
        }

        controller.begin_edit();
        for (field, value) in updates {
            controller.update_field(field, value)?;
        }
        let saved = controller.save().await?;
        Ok(serde_json::to_value(saved)?)
    }

    async fn cover(&mut self, action: CoverCommands) -> CliResult<Value> {
        let mut controller = ProfileController::new(self.store.clone(), self.board());
        let result = self.cover_action(&mut controller, action).await;
        self.collect(controller.notices_mut());
        result
    }

    async fn cover_action(
        &self,
        controller: &mut ProfileController,
        action: CoverCommands,
    ) -> CliResult<Value> {
        controller.load().await?;

        match action {
            CoverCommands::Show => Ok(json!({
                "coverLetter": controller.profile().cover_letter,
            })),
            CoverCommands::Copy => {
                controller.copy(ProfileField::CoverLetter, self.clipboard.as_ref())?;
                Ok(Value::Null)
            }
            CoverCommands::Set { text, file } => {
                let letter = match (text, file) {
                    (Some(text), _) => text,
                    (None, Some(path)) => read_text(&path)?,
                    (None, None) => {
                        return Err(CliError::input("provide cover letter text or --file"));
                    }
                };

                controller.begin_edit();
                controller.update_field(ProfileField::CoverLetter, letter)?;
                let saved = controller.save().await?;
                Ok(json!({ "coverLetter": saved.cover_letter }))
            }
        }
    }

    async fn custom(&mut self, action: CustomCommands) -> CliResult<Value> {
        let mut controller = CustomAttributesController::new(self.store.clone(), self.board());
        let result = self.custom_action(&mut controller, action).await;
        self.collect(controller.notices_mut());
        result
    }

    async fn custom_action(
        &self,
        controller: &mut CustomAttributesController,
        action: CustomCommands,
    ) -> CliResult<Value> {
        controller.load().await?;

        match action {
            CustomCommands::List => Ok(serde_json::to_value(controller.attributes())?),
            CustomCommands::Add { key, value } => {
                controller.set_draft(key, value);
                match controller.add().await? {
                    Some(created) => Ok(serde_json::to_value(created)?),
                    None => Err(CliError::input("key and value must both be non-empty")),
                }
            }
            CustomCommands::Remove { id } => {
                let removed = controller.remove(id).await?;
                Ok(json!({ "id": id, "removed": removed }))
            }
            CustomCommands::Copy { id } => {
                if controller.copy(id, self.clipboard.as_ref())? {
                    Ok(Value::Null)
                } else {
                    Err(CliError::input(format!("no custom info with id {id}")))
                }
            }
        }
    }

    async fn experience<R: BufRead, W: Write>(
        &mut self,
        action: ExperienceCommands,
        prompt: &mut Prompt<R, W>,
    ) -> CliResult<Value> {
        let mut controller =
            ExperienceController::new(self.seed.clone(), self.cache.clone(), self.board());
        let result = self.experience_action(&mut controller, action, prompt).await;
        self.collect(controller.notices_mut());
        result
    }

    async fn experience_action<R: BufRead, W: Write>(
        &mut self,
        controller: &mut ExperienceController,
        action: ExperienceCommands,
        prompt: &mut Prompt<R, W>,
    ) -> CliResult<Value> {
        // Reset never reads the cache.
        if !matches!(action, ExperienceCommands::Reset { .. }) {
            controller.load().await?;
        }

        match action {
            ExperienceCommands::List => experience_list(controller.experiences()),
            ExperienceCommands::Show { id } => match controller.get(id) {
                Some(experience) => experience_json(experience),
                None => Err(ControllerError::not_found(id).into()),
            },
            ExperienceCommands::Add { fields } => {
                let mut draft = ExperienceDraft::default();
                fields.apply(&mut draft);
                controller.begin_add();
                *controller.add_draft_mut() = draft;
                let added = controller.commit_add()?;
                experience_json(added)
            }
            ExperienceCommands::Edit { id, fields } => {
                controller.start_edit(id)?;
                fields.apply(controller.edit_draft_mut());
                let updated = controller.commit_edit()?;
                experience_json(updated)
            }
            ExperienceCommands::Delete { id, yes } => {
                if controller.get(id).is_none() {
                    debug!("Experience {id} not present, skipping confirmation");
                    return Ok(json!({ "id": id, "deleted": false }));
                }
                let Some(confirmed) = prompt.confirm(DELETE_QUESTION, yes)? else {
                    return Ok(cancelled());
                };
                let deleted = controller.delete(id, confirmed)?;
                Ok(json!({ "id": id, "deleted": deleted }))
            }
            ExperienceCommands::Export { output } => {
                let document = controller.export();
                let path = output.unwrap_or_else(default_export_path);
                std::fs::write(&path, document.to_pretty_json()?)
                    .map_err(|e| CliError::io(&path, e))?;

                info!(
                    "Exported {} experiences to {}",
                    document.experiences.len(),
                    path.display()
                );
                self.push(NoticeLevel::Success, "Experiences exported successfully!");
                Ok(json!({
                    "path": path.display().to_string(),
                    "count": document.experiences.len(),
                }))
            }
            ExperienceCommands::Reset { yes } => {
                let Some(confirmed) = prompt.confirm(RESET_QUESTION, yes)? else {
                    return Ok(cancelled());
                };
                let experiences = controller.reset_to_seed(confirmed).await?;
                experience_list(experiences)
            }
        }
    }

    fn board(&self) -> NoticeBoard {
        NoticeBoard::new(self.durations)
    }

    fn collect(&mut self, board: &mut NoticeBoard) {
        self.notices.extend(board.drain());
    }

    fn push(&mut self, level: NoticeLevel, message: &str) {
        let ttl = match level {
            NoticeLevel::Success => self.durations.success,
            NoticeLevel::Warning | NoticeLevel::Error => self.durations.error,
        };
        self.notices.push(Notice::new(level, message, ttl));
    }
}

/// Experience JSON with the formatted date range alongside the raw months
pub fn experience_json(experience: &Experience) -> CliResult<Value> {
    let mut value = serde_json::to_value(experience)?;
    if let Value::Object(ref mut map) = value {
        map.insert("dates".to_string(), Value::String(experience.display_range()));
    }
    Ok(value)
}

fn experience_list(experiences: &[Experience]) -> CliResult<Value> {
    experiences
        .iter()
        .map(experience_json)
        .collect::<CliResult<Vec<_>>>()
        .map(Value::Array)
}

fn cancelled() -> Value {
    json!({ "cancelled": true })
}

/// `experiences.json` in the download directory, else the working directory
pub fn default_export_path() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
        .join(EXPORT_FILE_NAME)
}

fn read_text(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}
