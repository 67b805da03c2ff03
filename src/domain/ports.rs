use crate::domain::model::{ExtractResult, MatchResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn csv_file(&self) -> &str;
    fn json_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn radius_m(&self) -> f64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    async fn transform(&self, data: ExtractResult) -> Result<MatchResult>;
    async fn load(&self, result: MatchResult) -> Result<String>;
}
