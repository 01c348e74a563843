use serde::{Deserialize, Serialize};

/// 图片识别结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkRecognition {
    /// 从模型输出中提取出的地标名称
    pub landmark_name: String,
    /// 视觉模型的原始描述
    pub description: String,
}
