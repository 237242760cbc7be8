use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use xrdview::dataset::{
    Dataset, DatasetId, PersistedRecord, RecordMetadata, RemoteId, SaveForm, WorkingSet,
};
use xrdview::reconcile::{AlwaysConfirm, Confirm, OverwriteRequest, Reconciler, SaveError};
use xrdview::remote::RecordStore;
use xrdview::series;

/// Arguments of the save command
pub struct SaveArgs {
    pub file: Option<PathBuf>,
    pub owner: Option<String>,
    pub material: Option<String>,
    pub elements: Vec<String>,
    pub temperature: Option<f64>,
    pub id: Option<i64>,
    pub yes: bool,
}

/// How a save command ended
#[derive(Debug, Clone, PartialEq)]
enum Saved {
    Record { id: RemoteId, name: String },
    Cancelled,
}

/// Asks on stderr and reads the answer from stdin
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm_overwrite(&mut self, request: &OverwriteRequest<'_>) -> bool {
        eprint!(
            "Record {} ({}) already exists. Overwrite it as {} / {} / [{}] / {}K? [y/N] ",
            request.id,
            request.display_name,
            request.fields.owner(),
            request.fields.material(),
            request.fields.element_list(),
            request.fields.temperature()
        );
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}

/// Save a pattern, reconciling against `--id` when given
pub fn run<S: RecordStore>(reconciler: &Reconciler<S>, args: SaveArgs) -> Result<()> {
    let outcome = if args.yes {
        save(reconciler, &args, &mut AlwaysConfirm)
    } else {
        save(reconciler, &args, &mut PromptConfirm)
    }?;

    match outcome {
        Saved::Record { id, name } => println!("Saved record {} ({})", id, name),
        Saved::Cancelled => println!("Cancelled, nothing was written"),
    }
    Ok(())
}

fn save<S: RecordStore>(
    reconciler: &Reconciler<S>,
    args: &SaveArgs,
    confirm: &mut dyn Confirm,
) -> Result<Saved> {
    let target = args.id.map(RemoteId);
    let stored = match target {
        Some(id) => find_record(reconciler, id)?,
        None => None,
    };

    let fields = merge_form(stored.as_ref().map(PersistedRecord::metadata), args)
        .validate()
        .context("Invalid record fields")?;
    let dataset = build_dataset(args.file.as_deref(), stored, target)?;

    let mut set = WorkingSet::new();
    let id = *dataset.id();
    set.push(dataset);

    match reconciler.save_in(&mut set, &id, &fields, confirm) {
        Ok(DatasetId::Remote(remote)) => {
            let name = set
                .get(&DatasetId::Remote(remote))
                .map(|d| d.display_name().to_string())
                .unwrap_or_default();
            Ok(Saved::Record { id: remote, name })
        }
        Ok(DatasetId::Local(local)) => bail!("Save returned unpersisted dataset {}", local),
        Err(SaveError::UserCancelled) => Ok(Saved::Cancelled),
        Err(e) => Err(e).context("Save failed"),
    }
}

/// Form to validate: the stored fields, with every given flag on top.
///
/// Edits start from the stored fields, never from the display name.
fn merge_form(stored: Option<&RecordMetadata>, args: &SaveArgs) -> SaveForm {
    let mut form = stored.map(SaveForm::from_metadata).unwrap_or_default();
    if let Some(owner) = &args.owner {
        form.owner = owner.clone();
    }
    if let Some(material) = &args.material {
        form.material = material.clone();
    }
    if !args.elements.is_empty() {
        form.elements = args.elements.clone();
    }
    if let Some(temperature) = args.temperature {
        form.temperature = temperature;
    }
    form
}

/// Dataset to reconcile.
///
/// A stored record keeps its remote identity, with `file` replacing its
/// pattern when given. Without a stored record `file` becomes a new local
/// dataset.
fn build_dataset(
    file: Option<&Path>,
    stored: Option<PersistedRecord>,
    target: Option<RemoteId>,
) -> Result<Dataset> {
    match (file, stored) {
        (Some(file), Some(record)) => {
            let series = series::parse_file(file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let mut dataset = Dataset::from(record);
            dataset.set_series(series);
            Ok(dataset)
        }
        (Some(file), None) => {
            if let Some(id) = target {
                info!("Record {} not found, a new record will be created", id);
            }
            Dataset::from_file(file).with_context(|| format!("Failed to load {}", file.display()))
        }
        (None, Some(record)) => Ok(Dataset::from(record)),
        (None, None) => match target {
            Some(id) => bail!("Record {} not found and no FILE given", id),
            None => bail!("Nothing to save: pass a FILE or --id"),
        },
    }
}

fn find_record<S: RecordStore>(
    reconciler: &Reconciler<S>,
    id: RemoteId,
) -> Result<Option<PersistedRecord>> {
    let records = reconciler
        .fetch_all()
        .context("Failed to fetch stored records")?;
    Ok(records.into_iter().find(|record| record.id() == id))
}
