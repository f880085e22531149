use rand::Rng;

use crate::data::model::Table;
use crate::data::synth;
use crate::settings::Settings;
use crate::view::bmi::BmiForm;
use crate::view::explorer::ExplorerForm;
use crate::view::Notice;

// ---------------------------------------------------------------------------
// Explorer session
// ---------------------------------------------------------------------------

/// The explorer's current table and the notices from the last action.
///
/// Each upload or generation replaces the table outright.
#[derive(Debug, Clone, Default)]
pub struct ExplorerSession {
    /// Loaded table (None until the user loads or generates one).
    pub table: Option<Table>,
    pub notices: Vec<Notice>,
}

impl ExplorerSession {
    /// Ingest the outcome of a file load.
    pub fn load(&mut self, result: anyhow::Result<Table>) {
        match result {
            Ok(table) => {
                log::info!(
                    "Loaded table with {} rows and columns {:?}",
                    table.len(),
                    table.column_names()
                );
                self.table = Some(table);
                self.notices = vec![Notice::success("File successfully uploaded!")];
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.table = None;
                self.notices = vec![
                    Notice::error(format!("Error: {e:#}")),
                    Notice::info("Try uploading a different file or generate simple data below."),
                ];
            }
        }
    }

    /// Replace the table with freshly generated demo data.
    pub fn generate<R: Rng>(&mut self, rng: &mut R, rows: usize) {
        let table = synth::generate(rng, rows);
        log::info!("Generated {} rows of simple data", table.len());
        self.table = Some(table);
        self.notices = vec![Notice::success("Simple data generated!")];
    }

    /// Drop the current table and notices.
    pub fn clear(&mut self) {
        self.table = None;
        self.notices.clear();
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Bmi,
    Explorer,
}

/// The full UI state, independent of rendering.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub tab: Tab,
    pub bmi: BmiForm,
    pub explorer: ExplorerSession,
    pub explorer_form: ExplorerForm,
    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let explorer_form = ExplorerForm::with_bins(settings.explorer.default_bins);
        Self {
            settings,
            tab: Tab::default(),
            bmi: BmiForm::default(),
            explorer: ExplorerSession::default(),
            explorer_form,
            status_message: None,
        }
    }

    /// Generate the fixed-size demo table, seeded when settings name a seed.
    pub fn generate_data(&mut self) {
        let rows = synth::SYNTHETIC_ROWS;
        match self.settings.explorer.seed {
            Some(seed) => {
                use rand::SeedableRng;
                let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                self.explorer.generate(&mut rng, rows);
            }
            None => self.explorer.generate(&mut rand::thread_rng(), rows),
        }
        self.explorer_form.column = None;
        self.tab = Tab::Explorer;
    }

    /// Ingest a loaded (or failed) table and reset the column choice.
    pub fn set_table(&mut self, result: anyhow::Result<Table>) {
        self.explorer.load(result);
        self.explorer_form.column = None;
        self.tab = Tab::Explorer;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
