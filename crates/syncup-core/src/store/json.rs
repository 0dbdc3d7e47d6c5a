//! File-backed JSON store

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{Dataset, Repository, TransactionFilter};
use crate::error::{Error, Result};
use crate::models::{Account, BudgetDoc, BudgetLine, Transaction};
use crate::month::Month;

/// Store that reads and rewrites a single JSON data file
///
/// The file is read on every call so edits made outside the process are
/// picked up. Writes are serialized and replace the file atomically.
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open an existing data file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "Data file {} (run `syncup init` to create it)",
                path.display()
            )));
        }

        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };
        // Fail early on a malformed file
        store.load()?;
        Ok(store)
    }

    /// Create (or overwrite) a data file holding `data`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn create(path: impl Into<PathBuf>, data: &Dataset) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created data directory: {}", parent.display());
            }
        }

        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };
        store.save(data)?;
        Ok(store)
    }

    /// Path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole dataset from disk
    pub fn load(&self) -> Result<Dataset> {
        let file = fs::File::open(&self.path)?;
        let data: Dataset = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            path = %self.path.display(),
            budgets = data.budgets.len(),
            accounts = data.accounts.len(),
            transactions = data.transactions.len(),
            "Loaded data file"
        );
        Ok(data)
    }

    /// Write the dataset to a temp file beside the target, then rename over it
    fn save(&self, data: &Dataset) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, data)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        // Keep the existing file's mode; temp files are created 0600
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), "Saved data file");
        Ok(())
    }
}

impl Repository for JsonStore {
    fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.load()?.accounts)
    }

    fn list_transactions(&self, filter: &TransactionFilter<'_>) -> Result<Vec<Transaction>> {
        Ok(self.load()?.filter_transactions(filter))
    }

    fn list_budgets(&self) -> Result<Vec<BudgetDoc>> {
        Ok(self.load()?.budgets)
    }

    fn upsert_budget(&self, month: &Month, lines: Vec<BudgetLine>) -> Result<BudgetDoc> {
        // Hold the lock across read-modify-write so concurrent updates don't interleave
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut data = self.load()?;
        let doc = data.upsert_budget(month, lines);
        self.save(&data)?;

        info!(month = %month, lines = doc.lines.len(), "Saved budget");
        Ok(doc)
    }
}
