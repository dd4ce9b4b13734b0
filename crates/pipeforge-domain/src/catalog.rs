//! Built-in domain catalog.
//!
//! Five ML domains with their palette vocabulary, inspector fields, and
//! default starter graphs. Default graphs are simple left-to-right chains;
//! node ids restart at "1" per domain because a domain switch replaces the
//! whole node set.

use crate::descriptor::{Category, DomainDescriptor, NodeTemplate};
use crate::schema::{Field, FieldSchema};

pub fn builtin_domains() -> Vec<DomainDescriptor> {
  vec![cv(), llm(), audio(), multimodal(), timeseries()]
}

fn cv() -> DomainDescriptor {
  DomainDescriptor {
    key: "cv".to_string(),
    name: "Computer Vision".to_string(),
    icon: "eye".to_string(),
    color: "indigo".to_string(),
    gradient: "from-indigo-500 to-violet-500".to_string(),
    pipeline_label: "CV Training Pipeline".to_string(),
    categories: vec![
      Category::new(
        "Data",
        "image",
        &["Data Source", "Label Loader", "Augmentation"],
      ),
      Category::new(
        "Preprocess",
        "wand-2",
        &["Resize", "Normalize", "Color Transform"],
      ),
      Category::new("Train", "cpu", &["Train Model", "Transfer Learning", "HP Tune"]),
      Category::new(
        "Evaluate",
        "bar-chart-2",
        &["mAP Eval", "IoU Eval", "Confusion Matrix"],
      ),
      Category::new("Export", "package", &["ONNX Export", "TensorRT", "TFLite"]),
      Category::new("Deploy", "upload", &["Register Model", "Deploy Endpoint"]),
    ],
    fields: FieldSchema::new(vec![
      Field::select(
        "model",
        "Model",
        &["YOLOv8n", "YOLOv8s", "ResNet-50", "EfficientNet-B4"],
      ),
      Field::text("image_size", "Image Size", "640"),
    ]),
    default_nodes: vec![
      NodeTemplate::new("1", "Data Source", 50.0, 80.0),
      NodeTemplate::new("2", "Augmentation", 200.0, 80.0),
      NodeTemplate::new("3", "Train Model", 350.0, 80.0),
      NodeTemplate::new("4", "mAP Eval", 500.0, 80.0),
      NodeTemplate::new("5", "Register Model", 650.0, 80.0),
    ],
  }
}

fn llm() -> DomainDescriptor {
  DomainDescriptor {
    key: "llm".to_string(),
    name: "LLM / NLP".to_string(),
    icon: "message-square".to_string(),
    color: "violet".to_string(),
    gradient: "from-violet-500 to-purple-500".to_string(),
    pipeline_label: "LLM Fine-tuning Pipeline".to_string(),
    categories: vec![
      Category::new(
        "Data",
        "database",
        &["Text Source", "Tokenize", "Format (Alpaca)"],
      ),
      Category::new("Process", "file-text", &["Clean", "Filter", "Dedupe"]),
      Category::new("Train", "brain", &["SFT", "LoRA", "RLHF", "DPO"]),
      Category::new(
        "Merge",
        "git-branch",
        &["Merge Adapter", "Quantize (GPTQ)", "Quantize (AWQ)"],
      ),
      Category::new(
        "Evaluate",
        "bar-chart-2",
        &["MMLU", "HellaSwag", "Human Eval", "Safety Test"],
      ),
      Category::new("Deploy", "upload", &["vLLM Deploy", "TGI Deploy", "Register"]),
    ],
    fields: FieldSchema::new(vec![
      Field::select("base_model", "Base Model", &["Llama-3-8B", "Mistral-7B", "Qwen-7B"]),
      Field::number("lora_rank", "LoRA Rank", "16"),
    ]),
    default_nodes: vec![
      NodeTemplate::new("1", "Text Source", 50.0, 80.0),
      NodeTemplate::new("2", "Format (Alpaca)", 200.0, 80.0),
      NodeTemplate::new("3", "LoRA", 350.0, 80.0),
      NodeTemplate::new("4", "Merge Adapter", 500.0, 80.0),
      NodeTemplate::new("5", "MMLU", 650.0, 80.0),
    ],
  }
}

fn audio() -> DomainDescriptor {
  DomainDescriptor {
    key: "audio".to_string(),
    name: "Speech / Audio".to_string(),
    icon: "mic".to_string(),
    color: "emerald".to_string(),
    gradient: "from-emerald-500 to-teal-500".to_string(),
    pipeline_label: "ASR Training Pipeline".to_string(),
    categories: vec![
      Category::new(
        "Data",
        "audio-waveform",
        &["Audio Source", "Transcript Load", "Speaker Data"],
      ),
      Category::new(
        "Preprocess",
        "volume-2",
        &["VAD", "Denoise", "Resample", "Normalize"],
      ),
      Category::new(
        "Features",
        "layers",
        &["Mel-Spectrogram", "MFCC", "Forced Align"],
      ),
      Category::new("Train", "cpu", &["ASR Train", "TTS Train", "VC Train"]),
      Category::new("Vocoder", "speaker", &["HiFi-GAN", "WaveGlow", "Vocos"]),
      Category::new("Evaluate", "bar-chart-2", &["WER Eval", "MOS Eval", "RTF Eval"]),
    ],
    fields: FieldSchema::new(vec![
      Field::select(
        "model",
        "Model",
        &["Whisper-large-v3", "Whisper-medium", "Conformer"],
      ),
      Field::select(
        "sample_rate",
        "Sample Rate",
        &["16000 Hz", "22050 Hz", "44100 Hz"],
      ),
    ]),
    default_nodes: vec![
      NodeTemplate::new("1", "Audio Source", 50.0, 80.0),
      NodeTemplate::new("2", "VAD", 200.0, 80.0),
      NodeTemplate::new("3", "Mel-Spectrogram", 350.0, 80.0),
      NodeTemplate::new("4", "ASR Train", 500.0, 80.0),
      NodeTemplate::new("5", "WER Eval", 650.0, 80.0),
    ],
  }
}

fn multimodal() -> DomainDescriptor {
  DomainDescriptor {
    key: "multimodal".to_string(),
    name: "Multimodal".to_string(),
    icon: "layers".to_string(),
    color: "pink".to_string(),
    gradient: "from-pink-500 to-rose-500".to_string(),
    pipeline_label: "VLM Training Pipeline".to_string(),
    categories: vec![
      Category::new("Image", "image", &["Image Source", "Vision Encoder"]),
      Category::new("Text", "message-square", &["Text Source", "Text Encoder"]),
      Category::new("Video", "video", &["Video Source", "Frame Extract"]),
      Category::new("Audio", "mic", &["Audio Source", "Audio Encoder"]),
      Category::new(
        "Fusion",
        "link-2",
        &["Alignment", "Projection", "Cross-Attention"],
      ),
      Category::new("Train", "brain", &["Contrastive", "VLM Train", "A/V Fusion"]),
      Category::new(
        "Evaluate",
        "bar-chart-2",
        &["VQA Eval", "Zero-shot", "Grounding"],
      ),
    ],
    fields: FieldSchema::new(vec![
      Field::select(
        "vision_encoder",
        "Vision Encoder",
        &["CLIP ViT-L/14", "SigLIP", "EVA-CLIP"],
      ),
      Field::select("llm_base", "LLM Base", &["Llama-3-8B", "Vicuna-13B"]),
    ]),
    default_nodes: vec![
      NodeTemplate::new("1", "Image Source", 50.0, 60.0),
      NodeTemplate::new("2", "Vision Encoder", 200.0, 60.0),
      NodeTemplate::new("3", "Projection", 350.0, 80.0),
      NodeTemplate::new("4", "VLM Train", 500.0, 80.0),
      NodeTemplate::new("5", "VQA Eval", 650.0, 80.0),
    ],
  }
}

fn timeseries() -> DomainDescriptor {
  DomainDescriptor {
    key: "timeseries".to_string(),
    name: "Time Series".to_string(),
    icon: "trending-up".to_string(),
    color: "teal".to_string(),
    gradient: "from-teal-500 to-cyan-500".to_string(),
    pipeline_label: "Forecasting Pipeline".to_string(),
    categories: vec![
      Category::new("Ingest", "database", &["Data Ingest", "Quality Check"]),
      Category::new(
        "Features",
        "layers",
        &["Lag", "Rolling", "Calendar", "Target Encode"],
      ),
      Category::new("Split", "calendar", &["Time Split", "Walk-forward"]),
      Category::new("Train", "cpu", &["XGBoost", "LightGBM", "LSTM", "Prophet"]),
      Category::new(
        "Anomaly",
        "alert-triangle",
        &["AutoEncoder", "IsolationForest", "Threshold"],
      ),
      Category::new("Evaluate", "bar-chart-2", &["Backtest", "MAPE/MAE", "PR Curve"]),
      Category::new(
        "Deploy",
        "target",
        &["Batch Deploy", "Realtime Deploy", "Monitor"],
      ),
    ],
    fields: FieldSchema::new(vec![
      Field::select(
        "algorithm",
        "Algorithm",
        &["XGBoost", "LightGBM", "Prophet", "LSTM"],
      ),
      Field::number("horizon", "Horizon", "7"),
    ]),
    default_nodes: vec![
      NodeTemplate::new("1", "Data Ingest", 50.0, 80.0),
      NodeTemplate::new("2", "Quality Check", 170.0, 80.0),
      NodeTemplate::new("3", "Rolling", 290.0, 80.0),
      NodeTemplate::new("4", "Walk-forward", 410.0, 80.0),
      NodeTemplate::new("5", "XGBoost", 530.0, 80.0),
      NodeTemplate::new("6", "Backtest", 650.0, 80.0),
    ],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_graph_types_exist_in_palette() {
    // The palette is descriptive rather than exhaustive, but the shipped
    // catalog keeps the two in sync so every starter node is draggable.
    for domain in builtin_domains() {
      for template in &domain.default_nodes {
        let known = domain
          .categories
          .iter()
          .any(|c| c.node_types.iter().any(|n| n == &template.type_name));
        assert!(
          known,
          "domain {}: default node type '{}' missing from categories",
          domain.key, template.type_name
        );
      }
    }
  }

  #[test]
  fn test_default_graph_ids_are_unique() {
    for domain in builtin_domains() {
      let mut ids: Vec<&str> = domain.default_nodes.iter().map(|n| n.id.as_str()).collect();
      ids.sort_unstable();
      let before = ids.len();
      ids.dedup();
      assert_eq!(ids.len(), before, "domain {}: duplicate template id", domain.key);
    }
  }

  #[test]
  fn test_cv_default_chain() {
    let domains = builtin_domains();
    let cv = domains.iter().find(|d| d.key == "cv").unwrap();
    let types: Vec<&str> = cv.default_nodes.iter().map(|n| n.type_name.as_str()).collect();
    assert_eq!(
      types,
      vec!["Data Source", "Augmentation", "Train Model", "mAP Eval", "Register Model"]
    );
  }

  #[test]
  fn test_every_domain_has_fields_and_label() {
    for domain in builtin_domains() {
      assert!(!domain.fields.is_empty(), "domain {}", domain.key);
      assert!(!domain.pipeline_label.is_empty());
      assert!(!domain.categories.is_empty());
    }
  }
}
