use super::OptionRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE: &str = "qbank.toml";

// =============================================================================
// Datasets
// =============================================================================

/// One certification track and the JSON file that holds its questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Display name (e.g., "AWS Developer")
    pub name: String,

    /// Path to the dataset file, relative to the project root
    pub path: PathBuf,
}

impl DatasetConfig {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

fn default_datasets() -> Vec<DatasetConfig> {
    vec![
        DatasetConfig::new("AWS Developer", "questions_aws_developer.json"),
        DatasetConfig::new("AWS AI", "questions_aws_ai.json"),
        DatasetConfig::new("Azure Developer", "questions_azure_developer.json"),
        DatasetConfig::new("Azure AI", "questions_azure_ai.json"),
    ]
}

/// What to do when a record's answer cannot be located among its options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerFallback {
    /// Substitute the first option (legacy behavior, counted in reports)
    #[default]
    FirstOption,
    /// Drop the record
    Discard,
}

// =============================================================================
// Stage configuration
// =============================================================================

/// PDF extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Directory scanned for *.pdf and *.txt sources
    pub pdf_dir: PathBuf,
    /// Output dataset written by `qbank extract`
    pub output: PathBuf,
    /// Regex for the heading that starts every question
    pub question_marker: String,
    pub min_block_chars: usize,
    pub min_question_chars: usize,
    pub max_question_chars: usize,
    pub max_explanation_chars: usize,
    pub max_options: usize,
    pub answer_fallback: AnswerFallback,
    pub explanation_placeholder: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pdf_dir: PathBuf::from("exam_questions with answers"),
            output: PathBuf::from("questions_full.json"),
            question_marker: r"NEW QUESTION \d+".to_string(),
            min_block_chars: 50,
            min_question_chars: 20,
            max_question_chars: 1200,
            max_explanation_chars: 1500,
            max_options: 5,
            answer_fallback: AnswerFallback::FirstOption,
            explanation_placeholder: "No explanation provided.".to_string(),
        }
    }
}

/// Dataset cleaning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    pub min_question_chars: usize,
    pub max_question_chars: usize,
    pub max_option_chars: usize,
    pub min_options: usize,
    pub max_explanation_chars: usize,
    pub explanation_placeholder: String,
    pub answer_fallback: AnswerFallback,
    pub option_rules: OptionRules,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            min_question_chars: 50,
            max_question_chars: 800,
            max_option_chars: 500,
            min_options: 3,
            max_explanation_chars: 1000,
            explanation_placeholder: "Refer to the official documentation for details."
                .to_string(),
            answer_fallback: AnswerFallback::FirstOption,
            option_rules: OptionRules::default(),
        }
    }
}

/// A themed list of generic wrong answers used to pad short option lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistractorPool {
    pub name: String,

    /// Substrings of the question text that select this pool
    #[serde(default)]
    pub question_keywords: Vec<String>,

    /// Words of the dataset name that select this pool (case-insensitive)
    #[serde(default)]
    pub dataset_keywords: Vec<String>,

    pub distractors: Vec<String>,
}

impl DistractorPool {
    /// A pool without keywords matches everything
    pub fn is_catch_all(&self) -> bool {
        self.question_keywords.is_empty() && self.dataset_keywords.is_empty()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_pools() -> Vec<DistractorPool> {
    vec![
        DistractorPool {
            name: "azure-services".to_string(),
            question_keywords: strings(&["Azure"]),
            dataset_keywords: Vec::new(),
            distractors: strings(&[
                "Azure Virtual Machines",
                "Azure Storage Account",
                "Azure Active Directory",
                "Azure Monitor",
                "Azure DevOps",
                "Azure Portal",
                "Azure Resource Manager",
                "Azure Logic Apps",
            ]),
        },
        DistractorPool {
            name: "ai-services".to_string(),
            question_keywords: strings(&["Cognitive"]),
            dataset_keywords: strings(&["ai"]),
            distractors: strings(&[
                "Azure Machine Learning",
                "Azure Cognitive Services",
                "Computer Vision API",
                "Speech Service",
                "Language Understanding",
                "Text Analytics",
                "Custom Vision",
                "Azure Bot Service",
            ]),
        },
        DistractorPool {
            name: "general".to_string(),
            question_keywords: Vec::new(),
            dataset_keywords: Vec::new(),
            distractors: strings(&[
                "Configure settings manually",
                "Use the Azure portal",
                "Contact Azure support",
                "Restart the service",
                "Update the configuration file",
                "It's not possible",
                "Use a third-party tool",
                "Manual deployment only",
            ]),
        },
    ]
}

/// Option backfill settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    pub min_options: usize,
    pub max_options: usize,
    pub pools: Vec<DistractorPool>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            min_options: 4,
            max_options: 6,
            pools: default_pools(),
        }
    }
}

/// Answer-count distribution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelabelConfig {
    pub seed: u64,
    pub single_percent: usize,
    pub double_percent: usize,
}

impl Default for RelabelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            single_percent: 60,
            double_percent: 30,
        }
    }
}

impl RelabelConfig {
    /// Remaining share that goes to the triple-answer bucket
    pub fn triple_percent(&self) -> usize {
        100usize.saturating_sub(self.single_percent + self.double_percent)
    }
}

/// Verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub min_options: usize,
    /// Expected number of records per dataset
    pub target_count: usize,
    pub required_keys: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            min_options: 4,
            target_count: 300,
            required_keys: strings(&["question", "options", "answer", "explanation"]),
        }
    }
}

/// Question quality heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    pub sample_size: usize,
    pub min_question_chars: usize,
    pub scenario_keywords: Vec<String>,
    pub weak_openers: Vec<String>,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            sample_size: 50,
            min_question_chars: 50,
            scenario_keywords: strings(&[
                "developer",
                "application",
                "company",
                "need",
                "want",
                "require",
            ]),
            weak_openers: strings(&["What is", "Which service"]),
        }
    }
}

// =============================================================================
// qbank Configuration
// =============================================================================

/// qbank configuration, read from `qbank.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QbankConfig {
    #[serde(default = "default_datasets")]
    pub datasets: Vec<DatasetConfig>,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub clean: CleanConfig,

    #[serde(default)]
    pub repair: RepairConfig,

    #[serde(default)]
    pub relabel: RelabelConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub analyze: AnalyzeConfig,
}

impl Default for QbankConfig {
    fn default() -> Self {
        Self {
            datasets: default_datasets(),
            extract: ExtractConfig::default(),
            clean: CleanConfig::default(),
            repair: RepairConfig::default(),
            relabel: RelabelConfig::default(),
            verify: VerifyConfig::default(),
            analyze: AnalyzeConfig::default(),
        }
    }
}

impl QbankConfig {
    /// Load config from qbank.toml, falling back to defaults when absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: QbankConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", config_path.display(), e))?;
        Ok(config)
    }

    /// Save config to qbank.toml
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_path = project_root.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Resolve the datasets a command should operate on
    ///
    /// An explicit path wins; otherwise every configured dataset is used.
    /// Relative paths are resolved against `project_root`.
    pub fn select_datasets(
        &self,
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> Vec<DatasetConfig> {
        match explicit {
            Some(path) => {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                vec![DatasetConfig::new(name, project_root.join(path))]
            }
            None => self
                .datasets
                .iter()
                .map(|d| DatasetConfig::new(d.name.clone(), project_root.join(&d.path)))
                .collect(),
        }
    }
}
