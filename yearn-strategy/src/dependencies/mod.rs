mod yearn_vault;
pub use yearn_vault::Client as YearnVaultClient;
