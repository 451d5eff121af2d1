pub static SERVICE_NAME: &str = "SERVICE_NAME";
pub static HOST: &str = "HOST";
pub static PORT: &str = "PORT";

pub static USE_MODELS: &str = "USE_MODELS";
pub static SENTIMENT_MODEL: &str = "SENTIMENT_MODEL";
pub static EMOTION_MODEL: &str = "EMOTION_MODEL";
pub static MODEL_TIMEOUT_MS: &str = "MODEL_TIMEOUT_MS";

// set by the Lambda runtime, absent when running locally
pub static AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";
