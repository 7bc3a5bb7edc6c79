//! Package-level constants: personas, fixed prompts, and sampling parameters.

/// Package name.
pub const NAME: &str = "lumina";

/// Seed persona for the tarot chat mode.
pub const CHAT_PERSONA: &str = "당신은 '루미나'라는 이름의 신비한 타로 마스터입니다. \
말투는 신비롭고 예의 바르며, 비유적인 표현을 자주 사용합니다. \
사용자에게 위로와 조언을 건네세요.";

/// System persona sent with every vision request.
pub const VISION_PERSONA: &str = "당신은 관상과 손금을 잘 보는 신비한 타로 마스터입니다. \
이미지의 특징을 분석해 운세를 점쳐주세요.";

/// Fixed user prompt paired with an uploaded face or palm image.
pub const ANALYSIS_PROMPT: &str =
    "이 사람의 관상이나 손금을 보고 운세, 성격, 미래에 대한 조언을 신비로운 말투로 해줘.";

/// Seed persona for talisman generation. Never sent to a model.
pub const TALISMAN_PERSONA: &str =
    "당신은 소원을 담아 행운의 부적을 그려주는 신비한 화가 루미나입니다.";

/// Prefix turning a wish into an image prompt.
pub const TALISMAN_PROMPT_PREFIX: &str = "A mystic talisman symbol for ";

/// Style suffix appended to every image-generation prompt.
pub const IMAGE_STYLE_SUFFIX: &str = ", mystical tarot card style, high quality, fantasy art";

/// Sampling temperature for chat completions.
pub const CHAT_TEMPERATURE: f64 = 0.7;

/// Output cap for vision analysis.
pub const VISION_MAX_TOKENS: u32 = 500;

/// Voice used for speech synthesis.
pub const DEFAULT_VOICE: &str = "shimmer";

/// Documented input limit of the hosted speech endpoint, in characters.
///
/// Input is not truncated or chunked; exceeding it is only logged.
pub const SPEECH_INPUT_LIMIT_CHARS: usize = 4096;
