use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use candle_transformers::models::xlm_roberta::{
    Config as RobertaConfig, XLMRobertaForSequenceClassification,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
struct LabelMap {
    #[serde(default)]
    id2label: BTreeMap<String, String>,
}

fn read_config_text(model_dir: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(model_dir.join("config.json"))?)
}

fn parse_config<T: serde::de::DeserializeOwned>(config_content: &str) -> Result<T> {
    serde_json::from_str(config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))
}

fn read_labels(config_content: &str) -> Result<Vec<String>> {
    let label_map: LabelMap = serde_json::from_str(config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse id2label: {}", e)))?;

    let mut indexed = label_map
        .id2label
        .into_iter()
        .map(|(id, label)| {
            id.parse::<usize>()
                .map(|id| (id, label))
                .map_err(|_| candle::Error::Msg(format!("Non-numeric id2label key: {}", id)))
        })
        .collect::<Result<Vec<_>>>()?;
    indexed.sort_by_key(|(id, _)| *id);

    Ok(indexed.into_iter().map(|(_, label)| label).collect())
}

fn load_weights(model_dir: &Path, device: &Device) -> Result<VarBuilder<'static>> {
    let weights_path = model_dir.join("model.safetensors");
    unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device) }
}

const ROBERTA_EMBEDDINGS: &str = "roberta.embeddings.word_embeddings.weight";

fn is_roberta(vb: &VarBuilder) -> bool {
    vb.contains_tensor(ROBERTA_EMBEDDINGS)
}

/// Weight prefix of a BERT checkpoint: `bert.` for task models, none for
/// bare encoders.
fn bert_prefix<'a>(vb: &VarBuilder<'a>) -> VarBuilder<'a> {
    if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
        vb.pp("bert")
    } else {
        vb.clone()
    }
}

/// Headless BERT used by the sentence encoder.
#[derive(Clone)]
pub struct BertEncoder {
    model: Arc<BertModel>,
    hidden_size: usize,
}

impl BertEncoder {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config: Config = parse_config(&read_config_text(model_dir)?)?;
        let vb = load_weights(model_dir, device)?;
        if is_roberta(&vb) {
            return Err(candle::Error::Msg(
                "RoBERTa checkpoints are not supported as sentence encoders".to_string(),
            ));
        }
        let model = BertModel::load(bert_prefix(&vb), &config)?;

        Ok(Self {
            model: Arc::new(model),
            hidden_size: config.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns token hidden states `[batch, seq, hidden]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.model.forward(input_ids, token_type_ids, attention_mask)
    }
}

/// `BertForSequenceClassification` head: `classifier(tanh(pooler(h_cls)))`.
///
/// Checkpoints trained without a pooler feed the raw CLS state to `classifier`.
pub(crate) struct PooledHead {
    pooler: Option<Linear>,
    classifier: Linear,
}

impl PooledHead {
    pub(crate) fn new(pooler: Option<Linear>, classifier: Linear) -> Self {
        Self { pooler, classifier }
    }

    fn load(vb: &VarBuilder, hidden_size: usize, num_labels: usize) -> Result<Self> {
        let backbone = bert_prefix(vb);
        let pooler = if backbone.contains_tensor("pooler.dense.weight") {
            Some(candle_nn::linear(
                hidden_size,
                hidden_size,
                backbone.pp("pooler.dense"),
            )?)
        } else {
            None
        };
        let classifier = candle_nn::linear(hidden_size, num_labels, vb.pp("classifier"))?;
        Ok(Self::new(pooler, classifier))
    }

    pub(crate) fn has_pooler(&self) -> bool {
        self.pooler.is_some()
    }

    /// Logits for CLS states `[batch, hidden]`.
    pub(crate) fn forward(&self, cls_token: &Tensor) -> Result<Tensor> {
        match &self.pooler {
            Some(pooler) => self
                .classifier
                .forward(&pooler.forward(cls_token)?.tanh()?),
            None => self.classifier.forward(cls_token),
        }
    }
}

enum SequenceClassifier {
    Bert { bert: BertModel, head: PooledHead },
    Roberta(XLMRobertaForSequenceClassification),
}

/// BERT or RoBERTa/XLM-R sequence classifier with `id2label.len()` outputs.
#[derive(Clone)]
pub struct BertClassifier {
    inner: Arc<SequenceClassifier>,
    labels: Arc<[String]>,
}

impl BertClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_content = read_config_text(model_dir)?;
        let labels = read_labels(&config_content)?;
        if labels.is_empty() {
            return Err(candle::Error::Msg(
                "config.json declares no id2label entries".to_string(),
            ));
        }

        let vb = load_weights(model_dir, device)?;
        let inner = if is_roberta(&vb) {
            let config: RobertaConfig = parse_config(&config_content)?;
            SequenceClassifier::Roberta(XLMRobertaForSequenceClassification::new(
                labels.len(),
                &config,
                vb,
            )?)
        } else {
            let config: Config = parse_config(&config_content)?;
            let bert = BertModel::load(bert_prefix(&vb), &config)?;
            let head = PooledHead::load(&vb, config.hidden_size, labels.len())?;
            if !head.has_pooler() {
                tracing::warn!("Classifier checkpoint has no pooler, using raw CLS states");
            }
            SequenceClassifier::Bert { bert, head }
        };

        Ok(Self {
            inner: Arc::new(inner),
            labels: labels.into(),
        })
    }

    /// Label names ordered by output index.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns logits `[batch, num_labels]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        match self.inner.as_ref() {
            SequenceClassifier::Bert { bert, head } => {
                let output = bert.forward(input_ids, token_type_ids, attention_mask)?;
                head.forward(&output.i((.., 0, ..))?)
            }
            SequenceClassifier::Roberta(model) => {
                let attention_mask = match attention_mask {
                    Some(mask) => mask.clone(),
                    None => input_ids.ones_like()?,
                };
                model.forward(input_ids, &attention_mask, token_type_ids)
            }
        }
    }
}
