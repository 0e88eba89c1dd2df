//! Planner controller: the single owner of the load → mutate → persist cycle.
//!
//! # Responsibility
//! - Accept discrete commands addressed by trip id, day index, activity id
//!   and block id.
//! - Resolve them against the current snapshot, run the pure engines and
//!   hand the resulting trip back to the document store.
//! - Persist after every change.
//!
//! # Invariants
//! - Lookup misses are no-ops reported as `CommandOutcome::Unchanged`.
//! - Nothing is written when a command changes nothing.
//! - Persistence failures are the only errors returned.

use crate::model::activity::{ActivityDraft, ActivityPatch};
use crate::model::block::CanvasBlock;
use crate::model::ids::{new_block_id, ActivityId, BlockId, TripId};
use crate::model::trip::Trip;
use crate::repo::blob_repo::BlobRepository;
use crate::service::{canvas_service, itinerary_service};
use crate::store::document_store::{DocumentStore, StoreError};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type PlannerResult<T> = Result<T, PlannerError>;

/// Planner command failure.
#[derive(Debug)]
pub enum PlannerError {
    /// The change was applied in memory but could not be persisted.
    Persist(StoreError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "failed to persist planner document: {err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<StoreError> for PlannerError {
    fn from(value: StoreError) -> Self {
        Self::Persist(value)
    }
}

/// One user intent, carrying everything needed to address its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerCommand {
    CreateTrip {
        title: String,
        start_date: String,
        end_date: String,
    },
    RenameTrip {
        trip_id: TripId,
        title: String,
    },
    DeleteTrip {
        trip_id: TripId,
    },
    AddDay {
        trip_id: TripId,
    },
    DeleteDay {
        trip_id: TripId,
        day_index: usize,
    },
    AddActivity {
        trip_id: TripId,
        day_index: usize,
        draft: ActivityDraft,
    },
    UpdateActivity {
        trip_id: TripId,
        activity_id: ActivityId,
        patch: ActivityPatch,
    },
    DeleteActivity {
        trip_id: TripId,
        day_index: usize,
        activity_id: ActivityId,
    },
    AppendTextBlock {
        trip_id: TripId,
        activity_id: ActivityId,
    },
    AppendImageBlock {
        trip_id: TripId,
        activity_id: ActivityId,
        image_ref: String,
    },
    UpdateTextBlock {
        trip_id: TripId,
        activity_id: ActivityId,
        block_id: BlockId,
        content: String,
    },
    RemoveBlock {
        trip_id: TripId,
        activity_id: ActivityId,
        block_id: BlockId,
    },
    SetAvatar {
        image_ref: String,
    },
}

impl PlannerCommand {
    /// Stable operation name used in log events.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::CreateTrip { .. } => "create_trip",
            Self::RenameTrip { .. } => "rename_trip",
            Self::DeleteTrip { .. } => "delete_trip",
            Self::AddDay { .. } => "add_day",
            Self::DeleteDay { .. } => "delete_day",
            Self::AddActivity { .. } => "add_activity",
            Self::UpdateActivity { .. } => "update_activity",
            Self::DeleteActivity { .. } => "delete_activity",
            Self::AppendTextBlock { .. } => "append_text_block",
            Self::AppendImageBlock { .. } => "append_image_block",
            Self::UpdateTextBlock { .. } => "update_text_block",
            Self::RemoveBlock { .. } => "remove_block",
            Self::SetAvatar { .. } => "set_avatar",
        }
    }
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Target missing or value identical; nothing was written.
    Unchanged,
    Updated,
    TripCreated(TripId),
    ActivityCreated(ActivityId),
    BlockCreated(BlockId),
}

impl CommandOutcome {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Top-level controller over one document store.
pub struct PlannerService<R: BlobRepository> {
    store: DocumentStore<R>,
    today: fn() -> NaiveDate,
}

impl<R: BlobRepository> PlannerService<R> {
    /// Loads the document from `repo`, falling back to defaults.
    pub fn new(repo: R) -> Self {
        Self {
            store: DocumentStore::open(repo),
            today: local_today,
        }
    }

    /// Overrides the "current date" source used when adding a day to an
    /// empty itinerary.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &DocumentStore<R> {
        &self.store
    }

    pub fn snapshot(&self) -> Arc<Vec<Trip>> {
        self.store.snapshot()
    }

    pub fn trips(&self) -> &[Trip] {
        self.store.trips()
    }

    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.store.trip(trip_id)
    }

    pub fn avatar(&self) -> &str {
        self.store.avatar()
    }

    /// Applies one command and persists when it changed the document.
    pub fn apply(&mut self, command: PlannerCommand) -> PlannerResult<CommandOutcome> {
        let op = command.op_name();
        let outcome = match command {
            PlannerCommand::CreateTrip {
                title,
                start_date,
                end_date,
            } => CommandOutcome::TripCreated(
                self.create_trip(&title, &start_date, &end_date)?.id,
            ),
            PlannerCommand::RenameTrip { trip_id, title } => {
                changed(self.rename_trip(&trip_id, title)?)
            }
            PlannerCommand::DeleteTrip { trip_id } => changed(self.delete_trip(&trip_id)?),
            PlannerCommand::AddDay { trip_id } => changed(self.add_day(&trip_id)?),
            PlannerCommand::DeleteDay { trip_id, day_index } => {
                changed(self.delete_day(&trip_id, day_index)?)
            }
            PlannerCommand::AddActivity {
                trip_id,
                day_index,
                draft,
            } => self
                .add_activity(&trip_id, day_index, draft)?
                .map_or(CommandOutcome::Unchanged, CommandOutcome::ActivityCreated),
            PlannerCommand::UpdateActivity {
                trip_id,
                activity_id,
                patch,
            } => changed(self.update_activity(&trip_id, &activity_id, &patch)?),
            PlannerCommand::DeleteActivity {
                trip_id,
                day_index,
                activity_id,
            } => changed(self.delete_activity(&trip_id, day_index, &activity_id)?),
            PlannerCommand::AppendTextBlock {
                trip_id,
                activity_id,
            } => self
                .append_text_block(&trip_id, &activity_id)?
                .map_or(CommandOutcome::Unchanged, CommandOutcome::BlockCreated),
            PlannerCommand::AppendImageBlock {
                trip_id,
                activity_id,
                image_ref,
            } => self
                .append_image_block(&trip_id, &activity_id, image_ref)?
                .map_or(CommandOutcome::Unchanged, CommandOutcome::BlockCreated),
            PlannerCommand::UpdateTextBlock {
                trip_id,
                activity_id,
                block_id,
                content,
            } => changed(self.update_text_block(&trip_id, &activity_id, &block_id, content)?),
            PlannerCommand::RemoveBlock {
                trip_id,
                activity_id,
                block_id,
            } => changed(self.remove_block(&trip_id, &activity_id, &block_id)?),
            PlannerCommand::SetAvatar { image_ref } => changed(self.set_avatar(image_ref)?),
        };

        if outcome.is_changed() {
            info!("event=command module=planner op={op} status=ok");
        } else {
            debug!("event=command module=planner op={op} status=noop");
        }
        Ok(outcome)
    }

    /// Creates a trip spanning `start_date..=end_date` and persists.
    pub fn create_trip(
        &mut self,
        title: &str,
        start_date: &str,
        end_date: &str,
    ) -> PlannerResult<Trip> {
        let trip = self.store.create(title, start_date, end_date);
        self.store.persist()?;
        Ok(trip)
    }

    pub fn rename_trip(&mut self, trip_id: &str, title: String) -> PlannerResult<bool> {
        self.mutate_trip(trip_id, |trip| Trip {
            title,
            ..trip.clone()
        })
    }

    pub fn delete_trip(&mut self, trip_id: &str) -> PlannerResult<bool> {
        if !self.store.delete(trip_id) {
            return Ok(false);
        }
        self.store.persist()?;
        Ok(true)
    }

    pub fn add_day(&mut self, trip_id: &str) -> PlannerResult<bool> {
        let today = (self.today)();
        self.mutate_trip(trip_id, |trip| itinerary_service::add_day_on(trip, today))
    }

    pub fn delete_day(&mut self, trip_id: &str, day_index: usize) -> PlannerResult<bool> {
        self.mutate_trip(trip_id, |trip| {
            itinerary_service::delete_day(trip, day_index)
        })
    }

    /// Adds an activity to a day; returns its id when the day exists.
    pub fn add_activity(
        &mut self,
        trip_id: &str,
        day_index: usize,
        draft: ActivityDraft,
    ) -> PlannerResult<Option<ActivityId>> {
        let mut created = None;
        let inserted = self.mutate_trip(trip_id, |trip| {
            let (next, activity_id) = itinerary_service::add_activity(trip, day_index, draft);
            created = activity_id;
            next
        })?;
        Ok(created.filter(|_| inserted))
    }

    pub fn update_activity(
        &mut self,
        trip_id: &str,
        activity_id: &str,
        patch: &ActivityPatch,
    ) -> PlannerResult<bool> {
        if patch.is_empty() {
            return Ok(false);
        }
        self.mutate_trip(trip_id, |trip| {
            itinerary_service::update_activity(trip, activity_id, patch)
        })
    }

    pub fn delete_activity(
        &mut self,
        trip_id: &str,
        day_index: usize,
        activity_id: &str,
    ) -> PlannerResult<bool> {
        self.mutate_trip(trip_id, |trip| {
            itinerary_service::delete_activity(trip, day_index, activity_id)
        })
    }

    /// Appends an empty text block; returns its id so the caller can focus it.
    pub fn append_text_block(
        &mut self,
        trip_id: &str,
        activity_id: &str,
    ) -> PlannerResult<Option<BlockId>> {
        self.append_block(trip_id, activity_id, CanvasBlock::text(new_block_id()))
    }

    pub fn append_image_block(
        &mut self,
        trip_id: &str,
        activity_id: &str,
        image_ref: String,
    ) -> PlannerResult<Option<BlockId>> {
        self.append_block(
            trip_id,
            activity_id,
            CanvasBlock::image(new_block_id(), image_ref),
        )
    }

    pub fn update_text_block(
        &mut self,
        trip_id: &str,
        activity_id: &str,
        block_id: &str,
        content: String,
    ) -> PlannerResult<bool> {
        self.mutate_blocks(trip_id, activity_id, |blocks| {
            canvas_service::update_text(blocks, block_id, content)
        })
    }

    pub fn remove_block(
        &mut self,
        trip_id: &str,
        activity_id: &str,
        block_id: &str,
    ) -> PlannerResult<bool> {
        self.mutate_blocks(trip_id, activity_id, |blocks| {
            canvas_service::remove(blocks, block_id)
        })
    }

    pub fn set_avatar(&mut self, image_ref: String) -> PlannerResult<bool> {
        if !self.store.set_avatar(image_ref) {
            return Ok(false);
        }
        self.store.persist_avatar()?;
        Ok(true)
    }

    fn append_block(
        &mut self,
        trip_id: &str,
        activity_id: &str,
        block: CanvasBlock,
    ) -> PlannerResult<Option<BlockId>> {
        let block_id = block.id().to_string();
        let appended = self.mutate_blocks(trip_id, activity_id, |blocks| {
            canvas_service::append_block(blocks, block)
        })?;
        Ok(appended.then_some(block_id))
    }

    fn mutate_blocks(
        &mut self,
        trip_id: &str,
        activity_id: &str,
        edit: impl FnOnce(&[CanvasBlock]) -> Vec<CanvasBlock>,
    ) -> PlannerResult<bool> {
        self.mutate_trip(trip_id, |trip| match trip.find_activity(activity_id) {
            Some((_, activity)) => {
                let patch = ActivityPatch::blocks(edit(&activity.blocks));
                itinerary_service::update_activity(trip, activity_id, &patch)
            }
            None => trip.clone(),
        })
    }

    fn mutate_trip(
        &mut self,
        trip_id: &str,
        edit: impl FnOnce(&Trip) -> Trip,
    ) -> PlannerResult<bool> {
        let Some(current) = self.store.trip(trip_id) else {
            debug!("event=trip_lookup module=planner status=miss");
            return Ok(false);
        };
        let next = edit(current);
        if !self.store.update(next) {
            return Ok(false);
        }
        self.store.persist()?;
        Ok(true)
    }
}

fn changed(value: bool) -> CommandOutcome {
    if value {
        CommandOutcome::Updated
    } else {
        CommandOutcome::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandOutcome, PlannerCommand, PlannerService};
    use crate::repo::blob_repo::MemoryBlobRepository;

    #[test]
    fn unknown_trip_is_unchanged() {
        let mut planner = PlannerService::new(MemoryBlobRepository::new());
        let outcome = planner
            .apply(PlannerCommand::AddDay {
                trip_id: "nope".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert!(planner.store().repo().is_empty());
    }

    #[test]
    fn op_names_are_snake_case() {
        let command = PlannerCommand::SetAvatar {
            image_ref: "x".to_string(),
        };
        assert_eq!(command.op_name(), "set_avatar");
    }
}
