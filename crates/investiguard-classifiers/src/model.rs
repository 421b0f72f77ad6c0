//! DistilBERT sentiment classifier (Tier C)
//!
//! Loads a DistilBERT sequence classification checkpoint (by default the
//! SST-2 fine-tune) with Candle and reports a POSITIVE/NEGATIVE distribution.
//! Weights are loaded once; inference runs on the blocking thread pool.

use crate::classifier::{
    ClassificationMetadata, ClassificationResult, Classifier, ClassifierTier,
};
use crate::config::{DeviceSpec, ModelSource, ModelSpec};
use candle_core::{DType, Device, IndexOp, Module, Tensor, D};
use candle_nn::{Linear, VarBuilder};
use candle_transformers::models::distilbert::{Config as DistilBertConfig, DistilBertModel};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use investiguard_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokenizers::{Tokenizer, TruncationParams};

fn model_err(context: &str) -> impl Fn(candle_core::Error) -> Error + '_ {
    move |e| Error::model(format!("{}: {}", context, e))
}

/// Files needed to build the classifier
struct ModelFiles {
    config: PathBuf,
    weights: PathBuf,
    tokenizer: PathBuf,
}

struct Inner {
    model: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    device: Device,
}

pub struct ModelSentimentClassifier {
    name: String,
    inner: Arc<Inner>,
}

impl ModelSentimentClassifier {
    /// Resolve, download if needed, and load the model described by `spec`
    pub fn load(spec: &ModelSpec) -> Result<Self> {
        let files = resolve_files(spec)?;
        let device = create_device(spec.device)?;

        let raw_config = std::fs::read_to_string(&files.config)?;
        let config: DistilBertConfig = serde_json::from_str(&raw_config)?;
        let extras: serde_json::Value = serde_json::from_str(&raw_config)?;

        let dim = extras
            .get("dim")
            .and_then(|v| v.as_u64())
            .map(|v| v as usize)
            .ok_or_else(|| Error::model("model config is missing 'dim'"))?;
        let labels = id_to_labels(&extras);

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[files.weights], DType::F32, &device)
                .map_err(model_err("Failed to load weights"))?
        };

        let model = DistilBertModel::load(vb.pp("distilbert"), &config)
            .map_err(model_err("Failed to load DistilBERT"))?;
        let pre_classifier = candle_nn::linear(dim, dim, vb.pp("pre_classifier"))
            .map_err(model_err("Failed to load pre-classifier head"))?;
        let classifier = candle_nn::linear(dim, labels.len(), vb.pp("classifier"))
            .map_err(model_err("Failed to load classifier head"))?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| Error::model(format!("Failed to load tokenizer: {}", e)))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: spec.max_length,
                ..Default::default()
            }))
            .map_err(|e| Error::model(format!("Failed to configure truncation: {}", e)))?;

        tracing::info!(
            labels = ?labels,
            device = ?spec.device,
            "Loaded DistilBERT sentiment classifier"
        );

        Ok(Self {
            name: "distilbert-sentiment".to_string(),
            inner: Arc::new(Inner {
                model,
                pre_classifier,
                classifier,
                tokenizer,
                labels,
                device,
            }),
        })
    }
}

impl Inner {
    /// Softmax distribution over the model's labels
    fn predict(&self, text: &str) -> Result<Vec<(String, f32)>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| Error::classifier(format!("Tokenization failed: {}", e)))?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(model_err("Failed to create input tensor"))?;
        let seq_len = input_ids.dim(1).map_err(model_err("Invalid input shape"))?;

        // Nothing is masked for a single unpadded sequence
        let mask = Tensor::zeros((seq_len, seq_len), DType::U8, &self.device)
            .map_err(model_err("Failed to create attention mask"))?;

        let hidden = self
            .model
            .forward(&input_ids, &mask)
            .map_err(model_err("Model forward pass failed"))?;

        let cls = hidden.i((.., 0)).map_err(model_err("Failed to select [CLS]"))?;
        let logits = self
            .pre_classifier
            .forward(&cls)
            .and_then(|x| x.relu())
            .and_then(|x| self.classifier.forward(&x))
            .map_err(model_err("Classification head failed"))?;

        let probs = candle_nn::ops::softmax(&logits, D::Minus1)
            .and_then(|p| p.squeeze(0))
            .and_then(|p| p.to_vec1::<f32>())
            .map_err(model_err("Softmax failed"))?;

        Ok(self.labels.iter().cloned().zip(probs).collect())
    }
}

#[async_trait::async_trait]
impl Classifier for ModelSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        let scores = tokio::task::spawn_blocking(move || inner.predict(&text))
            .await
            .map_err(|e| Error::internal(format!("Inference task failed: {}", e)))??;

        let (label, score) = scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .cloned()
            .ok_or_else(|| Error::classifier("Model produced no scores"))?;

        Ok(ClassificationResult {
            label,
            score,
            metadata: ClassificationMetadata {
                model: Some(self.name.clone()),
                all_scores: Some(scores),
                ..Default::default()
            },
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::C
    }
}

fn resolve_files(spec: &ModelSpec) -> Result<ModelFiles> {
    match &spec.source {
        ModelSource::Local { path } => local_files(path),
        ModelSource::HuggingFace { repo, revision } => {
            tracing::info!("Fetching sentiment model from HuggingFace: {} @ {}", repo, revision);

            let api = Api::new()
                .map_err(|e| Error::model(format!("Failed to initialize HuggingFace API: {}", e)))?;
            let model_repo = api.repo(Repo::with_revision(
                repo.clone(),
                RepoType::Model,
                revision.clone(),
            ));

            let fetch = |repo: &hf_hub::api::sync::ApiRepo, file: &str| {
                repo.get(file)
                    .map_err(|e| Error::model(format!("Failed to download {}: {}", file, e)))
            };

            let config = fetch(&model_repo, "config.json")?;
            let weights = fetch(&model_repo, "model.safetensors")?;
            let tokenizer = match model_repo.get("tokenizer.json") {
                Ok(path) => path,
                Err(_) => {
                    tracing::debug!(
                        "No tokenizer.json in {}, using {}",
                        repo,
                        spec.tokenizer_repo
                    );
                    fetch(&api.model(spec.tokenizer_repo.clone()), "tokenizer.json")?
                }
            };

            Ok(ModelFiles {
                config,
                weights,
                tokenizer,
            })
        }
    }
}

fn local_files(dir: &Path) -> Result<ModelFiles> {
    let files = ModelFiles {
        config: dir.join("config.json"),
        weights: dir.join("model.safetensors"),
        tokenizer: dir.join("tokenizer.json"),
    };

    for path in [&files.config, &files.weights, &files.tokenizer] {
        if !path.exists() {
            return Err(Error::config(format!(
                "Model file not found: {}",
                path.display()
            )));
        }
    }

    Ok(files)
}

fn create_device(device: DeviceSpec) -> Result<Device> {
    match device {
        DeviceSpec::Cpu => Ok(Device::Cpu),
        DeviceSpec::Cuda => Device::new_cuda(0).map_err(model_err("Failed to create CUDA device")),
        DeviceSpec::Metal => {
            Device::new_metal(0).map_err(model_err("Failed to create Metal device"))
        }
    }
}

/// Labels ordered by class index, from `id2label` when present
fn id_to_labels(config: &serde_json::Value) -> Vec<String> {
    let mut labels: Vec<(usize, String)> = config
        .get("id2label")
        .and_then(|v| v.as_object())
        .map(|map| {
            map.iter()
                .filter_map(|(id, label)| {
                    Some((id.parse::<usize>().ok()?, label.as_str()?.to_string()))
                })
                .collect()
        })
        .unwrap_or_default();

    if labels.is_empty() {
        return vec!["NEGATIVE".to_string(), "POSITIVE".to_string()];
    }

    labels.sort_by_key(|(id, _)| *id);
    labels.into_iter().map(|(_, label)| label).collect()
}
