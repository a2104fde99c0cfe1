use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 目录扫描错误
    #[error("扫描错误: {0}")]
    Scan(#[from] ScanError),
    /// 文件读取错误
    #[error("读取错误: {0}")]
    Read(#[from] ReadError),
    /// 翻译服务错误
    #[error("翻译错误: {0}")]
    Translation(#[from] TranslationError),
    /// 结果写入错误
    #[error("写入错误: {0}")]
    Write(#[from] WriteError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量不存在或为空
    #[error("环境变量 {var_name} 不存在或为空")]
    EnvVarNotFound { var_name: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 工作目录不可用
    #[error("无法获取当前工作目录: {0}")]
    WorkingDirectory(#[source] std::io::Error),
}

/// 目录扫描错误
#[derive(Debug, Error)]
pub enum ScanError {
    /// 根目录无法读取
    #[error("无法读取目录 {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 文件读取错误
#[derive(Debug, Error)]
pub enum ReadError {
    /// 没有注册对应类型的读取器
    #[error("不支持的文件类型: {0}")]
    UnsupportedContentType(String),
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 文件内容不是合法的 UTF-8
    #[error("文件内容不是 UTF-8 编码 ({})", .path.display())]
    Encoding { path: PathBuf },
    /// .docx 解析失败（压缩包或 XML 损坏）
    #[error("无法解析 docx 文件 ({}): {message}", .path.display())]
    Docx { path: PathBuf, message: String },
    /// 转换程序无法启动
    #[error("无法启动转换程序 {program}: {source}")]
    ConverterUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// 转换程序执行失败
    #[error("转换程序 {program} 执行失败 ({status}): {stderr}")]
    ConversionFailed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// 翻译服务错误
#[derive(Debug, Error)]
pub enum TranslationError {
    /// 请求构建失败
    #[error("无法构建翻译请求: {0}")]
    InvalidRequest(String),
    /// API 调用失败（鉴权、网络、配额等）
    #[error("翻译 API 调用失败 (部署: {deployment}): {message}")]
    ApiCallFailed { deployment: String, message: String },
    /// 响应无法解析
    #[error("无法解析翻译响应: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    /// 响应中没有译文
    #[error("翻译返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 结果写入错误
#[derive(Debug, Error)]
pub enum WriteError {
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 响应序列化失败
    #[error("无法序列化翻译响应: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReadError {
    /// 创建文件读取错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }

    /// 创建 docx 解析错误
    pub fn docx(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ReadError::Docx {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl WriteError {
    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WriteError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
