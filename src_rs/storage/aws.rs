// 목적:
// - S3/Glue 클라이언트가 공유하는 AWS SDK 설정 로드와 오류 변환을 담당한다.
//
// 설명:
// - 첫 요청 전에 자격 증명 해석 여부를 확인해 "자격 증명 없음"을 별도 오류로 구분한다.
// - SdkError는 전송 계층 오류와 서비스 오류로 나눠 CoreError::Aws 메시지로 변환한다.
// - 클라이언트는 호출 단위로 만들고 컴포넌트 간에 재사용하지 않는다.
//
// 디자인 패턴:
// - 어댑터(Adapter) + 능력 확인(Capability Check).
//
// 참조:
// - src_rs/storage/row_source.rs
// - src_rs/storage/fallback_archive.rs
// - src_rs/catalog/glue_registrar.rs

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

use crate::core::config::ObjectStoreConfig;
use crate::core::errors::{CoreError, CoreResult};

/// 리전/엔드포인트를 반영한 SDK 설정을 읽고 자격 증명이 해석되는지 확인한다.
pub async fn load_sdk_config(config: &ObjectStoreConfig) -> CoreResult<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    ensure_credentials(&sdk_config).await?;
    Ok(sdk_config)
}

async fn ensure_credentials(sdk_config: &SdkConfig) -> CoreResult<()> {
    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        CoreError::MissingCredentials("자격 증명 공급자가 구성되지 않았습니다".to_string())
    })?;

    match provider.provide_credentials().await {
        Ok(_) => {
            debug!("AWS 자격 증명 해석 완료");
            Ok(())
        }
        Err(error) if matches!(error, CredentialsError::CredentialsNotLoaded { .. }) => Err(
            CoreError::MissingCredentials(format!("{}", DisplayErrorContext(&error))),
        ),
        Err(error) => Err(CoreError::Aws(format!(
            "자격 증명 공급자 오류: {}",
            DisplayErrorContext(&error)
        ))),
    }
}

pub async fn create_s3_client(config: &ObjectStoreConfig) -> CoreResult<S3Client> {
    let sdk_config = load_sdk_config(config).await?;
    let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);

    // MinIO/LocalStack 같은 S3 호환 엔드포인트는 path-style 주소가 필요하다.
    if config.endpoint_url.is_some() {
        builder = builder.force_path_style(true);
    }

    Ok(S3Client::from_conf(builder.build()))
}

/// SDK 오류를 CoreError로 변환한다.
pub fn map_sdk_error<E, R>(operation: &str, error: SdkError<E, R>) -> CoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    let full_msg = format!("{}", DisplayErrorContext(&error));

    match &error {
        SdkError::ConstructionFailure(_) => {
            CoreError::Aws(format!("{} 요청 생성 실패: {}", operation, full_msg))
        }
        SdkError::TimeoutError(_) => {
            CoreError::Aws(format!("{} 요청 시간 초과: {}", operation, full_msg))
        }
        SdkError::DispatchFailure(_) => {
            CoreError::Aws(format!("{} 전송 실패: {}", operation, full_msg))
        }
        SdkError::ResponseError(_) => {
            CoreError::Aws(format!("{} 응답 해석 실패: {}", operation, full_msg))
        }
        SdkError::ServiceError(context) => {
            let service_error = context.err();
            CoreError::Aws(format!(
                "{} 서비스 오류: code={}, message={}",
                operation,
                service_error.code().unwrap_or("Unknown"),
                service_error.message().unwrap_or("메시지 없음")
            ))
        }
        _ => CoreError::Aws(format!("{} 실패: {}", operation, full_msg)),
    }
}
