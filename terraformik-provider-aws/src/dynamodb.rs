//! DynamoDB calls for the lock table

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::client::Waiters;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use terraformik_core::provider::{LockTableApi, ProviderError, ProviderResult, Step};
use terraformik_core::resource::LockTableSpec;

use crate::{AwsProvider, error_message};

/// Key schema, attribute definition and throughput for a lock table
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub attribute: AttributeDefinition,
    pub key: KeySchemaElement,
    pub throughput: ProvisionedThroughput,
}

/// Build the DynamoDB shapes for `spec`: one string `HASH` key, provisioned billing
pub fn table_definition(spec: &LockTableSpec) -> Result<TableDefinition, String> {
    let attribute = AttributeDefinition::builder()
        .attribute_name(&spec.hash_key)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| e.to_string())?;

    let key = KeySchemaElement::builder()
        .attribute_name(&spec.hash_key)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| e.to_string())?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(spec.throughput.read_capacity_units)
        .write_capacity_units(spec.throughput.write_capacity_units)
        .build()
        .map_err(|e| e.to_string())?;

    Ok(TableDefinition {
        attribute,
        key,
        throughput,
    })
}

#[async_trait]
impl LockTableApi for AwsProvider {
    async fn create_table(&self, spec: &LockTableSpec) -> ProviderResult<()> {
        let definition = table_definition(spec)
            .map_err(|e| ProviderError::new(&spec.name, Step::CreateTable, e))?;

        let output = self
            .dynamodb_client
            .create_table()
            .table_name(&spec.name)
            .attribute_definitions(definition.attribute)
            .key_schema(definition.key)
            .provisioned_throughput(definition.throughput)
            .send()
            .await
            .map_err(|e| ProviderError::new(&spec.name, Step::CreateTable, error_message(&e)))?;

        if let Some(status) = output.table_description().and_then(|d| d.table_status()) {
            log::debug!("table {} status after create: {}", spec.name, status.as_str());
        }
        Ok(())
    }

    async fn wait_until_active(&self, name: &str, max_wait: Duration) -> ProviderResult<()> {
        self.dynamodb_client
            .wait_until_table_exists()
            .table_name(name)
            .wait(max_wait)
            .await
            .map_err(|e| ProviderError::new(name, Step::WaitForTable, error_message(&e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terraformik_core::resource::Throughput;

    fn lock_table() -> LockTableSpec {
        LockTableSpec {
            name: "shop-staging-terraformik-locks".to_string(),
            hash_key: "LockID".to_string(),
            throughput: Throughput {
                read_capacity_units: 5,
                write_capacity_units: 5,
            },
        }
    }

    #[test]
    fn test_table_definition_uses_string_hash_key() {
        let definition = table_definition(&lock_table()).unwrap();

        assert_eq!(definition.attribute.attribute_name(), "LockID");
        assert_eq!(
            definition.attribute.attribute_type(),
            &ScalarAttributeType::S
        );
        assert_eq!(definition.key.attribute_name(), "LockID");
        assert_eq!(definition.key.key_type(), &KeyType::Hash);
    }

    #[test]
    fn test_table_definition_throughput() {
        let mut spec = lock_table();
        spec.throughput.write_capacity_units = 3;
        let definition = table_definition(&spec).unwrap();

        assert_eq!(definition.throughput.read_capacity_units(), 5);
        assert_eq!(definition.throughput.write_capacity_units(), 3);
    }
}
