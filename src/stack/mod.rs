// Copyright (c) 2025 - Cowboy AI, Inc.

//! Resource Synthesis - Input Document → Terraform JSON
//!
//! A pure mapping from a validated [`AppInterfaceInput`] to the declarative
//! resource set Terraform applies:
//!
//! ```text
//! AppInterfaceInput ──synthesize──> TerraformDocument
//!                                     ├─ terraform.backend.s3
//!                                     ├─ provider.aws / provider.random
//!                                     ├─ aws_elasticache_parameter_group.<name>   (optional)
//!                                     ├─ random_password.<identifier>-password    (transit encryption only)
//!                                     ├─ aws_elasticache_replication_group.<identifier>
//!                                     └─ output.<prefix>__db_{endpoint,port,auth_token}
//! ```
//!
//! Synthesis never touches the network. Writing the document to disk is a
//! separate step, see [`write_stack`].

pub mod expression;
pub mod resources;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::{AppInterfaceInput, ElasticacheData, ParameterGroup};
use crate::errors::{ElasticacheError, ElasticacheResult};

pub use expression::{Expression, ResourceRef};
pub use resources::*;

/// Suffix of the endpoint output name
pub const ENDPOINT_OUTPUT_SUFFIX: &str = "__db_endpoint";
/// Suffix of the port output name
pub const PORT_OUTPUT_SUFFIX: &str = "__db_port";
/// Suffix of the auth token output name
pub const AUTH_TOKEN_OUTPUT_SUFFIX: &str = "__db_auth_token";

/// Length of the generated auth token
pub const AUTH_TOKEN_LENGTH: u32 = 20;
/// Special characters Elasticache accepts in an AUTH token
pub const AUTH_TOKEN_SPECIAL_CHARS: &str = "!&#$^<>-";
/// Keeper key that forces a new auth token when its value changes
pub const RESET_PASSWORD_KEEPER: &str = "reset_password";

pub const STATE_PROFILE: &str = "external-resources-state";
pub const AWS_PROVIDER_SOURCE: &str = "hashicorp/aws";
pub const AWS_PROVIDER_VERSION: &str = "~> 5.0";
pub const RANDOM_PROVIDER_SOURCE: &str = "hashicorp/random";
pub const RANDOM_PROVIDER_VERSION: &str = "~> 3.6";

/// Synthesize the full Terraform document for one input
pub fn synthesize(input: &AppInterfaceInput) -> TerraformDocument {
    let data = &input.data;
    info!(
        "Synthesizing Elasticache stack for {} ({})",
        data.identifier, data.replication_group_id
    );

    let mut resource = Resources::default();

    let parameter_group = data.parameter_group.as_ref().map(|pg| {
        let (reference, block) = parameter_group_resource(pg, data);
        resource
            .aws_elasticache_parameter_group
            .insert(reference.name().to_string(), block);
        reference
    });

    let auth_token = data.transit_encryption().then(|| {
        let (reference, block) = random_password_resource(data);
        resource
            .random_password
            .insert(reference.name().to_string(), block);
        reference.attr("result")
    });

    let has_secret = auth_token.is_some();
    let replication_group = ResourceRef::new(REPLICATION_GROUP_TYPE, &data.identifier);
    resource.aws_elasticache_replication_group.insert(
        replication_group.name().to_string(),
        replication_group_resource(data, parameter_group.as_ref(), auth_token),
    );

    let output = outputs(&data.output_prefix, &replication_group, has_secret);

    TerraformDocument {
        terraform: settings(input),
        provider: Providers {
            aws: vec![AwsProvider {
                region: data.region.clone(),
                default_tags: data.default_tags.clone(),
            }],
            random: vec![RandomProvider::default()],
        },
        resource,
        output,
    }
}

fn settings(input: &AppInterfaceInput) -> TerraformSettings {
    let state = &input.provision.module_provision_data;
    let mut required_providers = BTreeMap::new();
    required_providers.insert(
        "aws".to_string(),
        ProviderRequirement {
            source: AWS_PROVIDER_SOURCE.to_string(),
            version: AWS_PROVIDER_VERSION.to_string(),
        },
    );
    required_providers.insert(
        "random".to_string(),
        ProviderRequirement {
            source: RANDOM_PROVIDER_SOURCE.to_string(),
            version: RANDOM_PROVIDER_VERSION.to_string(),
        },
    );

    TerraformSettings {
        backend: Backend {
            s3: S3Backend {
                bucket: state.tf_state_bucket.clone(),
                key: state.tf_state_key.clone(),
                encrypt: true,
                region: state.tf_state_region.clone(),
                dynamodb_table: state.tf_state_dynamodb_table.clone(),
                profile: STATE_PROFILE.to_string(),
            },
        },
        required_providers,
    }
}

fn parameter_group_resource(
    pg: &ParameterGroup,
    data: &ElasticacheData,
) -> (ResourceRef, ParameterGroupResource) {
    debug!("Adding parameter group {} ({})", pg.name, pg.family);
    let block = ParameterGroupResource {
        family: pg.family.clone(),
        name: pg.name.clone(),
        description: pg.description.clone(),
        parameter: pg
            .parameters
            .iter()
            .map(|p| ParameterBlock {
                name: p.name.clone(),
                value: p.value.to_string(),
            })
            .collect(),
        tags: data.tags.clone(),
        // never leave the replication group without a parameter group
        lifecycle: Lifecycle {
            create_before_destroy: true,
        },
    };
    (ResourceRef::new(PARAMETER_GROUP_TYPE, &pg.name), block)
}

fn random_password_resource(data: &ElasticacheData) -> (ResourceRef, RandomPasswordResource) {
    let keepers = data
        .reset_password
        .as_ref()
        .filter(|marker| !marker.is_empty())
        .map(|marker| BTreeMap::from([(RESET_PASSWORD_KEEPER.to_string(), marker.clone())]));

    let block = RandomPasswordResource {
        length: AUTH_TOKEN_LENGTH,
        override_special: AUTH_TOKEN_SPECIAL_CHARS.to_string(),
        keepers,
    };
    let name = format!("{}-password", data.identifier);
    (ResourceRef::new(RANDOM_PASSWORD_TYPE, name), block)
}

fn replication_group_resource(
    data: &ElasticacheData,
    parameter_group: Option<&ResourceRef>,
    auth_token: Option<Expression>,
) -> ReplicationGroupResource {
    ReplicationGroupResource {
        apply_immediately: data.apply_immediately,
        at_rest_encryption_enabled: data.at_rest_encryption_enabled,
        auto_minor_version_upgrade: data.auto_minor_version_upgrade.unwrap_or(false).to_string(),
        automatic_failover_enabled: data.automatic_failover_enabled,
        auth_token,
        description: data.replication_group_description.clone(),
        engine: data.engine.clone(),
        engine_version: data.engine_version.clone(),
        log_delivery_configuration: data
            .log_delivery_configuration
            .iter()
            .flatten()
            .map(|ldc| LogDeliveryBlock {
                destination: ldc.destination.clone(),
                destination_type: ldc.destination_type.clone(),
                log_format: ldc.log_format.clone(),
                log_type: ldc.log_type.clone(),
            })
            .collect(),
        maintenance_window: data.maintenance_window.clone(),
        multi_az_enabled: data.multi_az_enabled,
        node_type: data.node_type.clone(),
        notification_topic_arn: data.notification_topic_arn.clone(),
        num_cache_clusters: data.number_cache_clusters,
        num_node_groups: data.num_node_groups,
        parameter_group_name: data.parameter_group_name.clone(),
        port: data.port,
        preferred_cache_cluster_azs: data.availability_zones.clone(),
        replicas_per_node_group: data.replicas_per_node_group,
        replication_group_id: data.replication_group_id.clone(),
        security_group_ids: data.security_group_ids.clone(),
        snapshot_retention_limit: data.snapshot_retention_limit,
        snapshot_window: data.snapshot_window.clone(),
        subnet_group_name: data.subnet_group_name.clone(),
        transit_encryption_enabled: data.transit_encryption_enabled,
        transit_encryption_mode: data.transit_encryption_mode.clone(),
        tags: data.tags.clone(),
        depends_on: parameter_group.map(|pg| vec![pg.address()]),
    }
}

fn outputs(
    prefix: &str,
    replication_group: &ResourceRef,
    has_secret: bool,
) -> BTreeMap<String, Output> {
    let endpoint = Expression::conditional(
        replication_group.attr("cluster_enabled"),
        replication_group.attr("configuration_endpoint_address"),
        replication_group.attr("primary_endpoint_address"),
    );

    BTreeMap::from([
        (
            format!("{prefix}{ENDPOINT_OUTPUT_SUFFIX}"),
            Output {
                value: Some(endpoint),
                sensitive: false,
            },
        ),
        (
            format!("{prefix}{PORT_OUTPUT_SUFFIX}"),
            Output {
                value: Some(replication_group.attr("port")),
                sensitive: false,
            },
        ),
        (
            format!("{prefix}{AUTH_TOKEN_OUTPUT_SUFFIX}"),
            Output {
                value: has_secret.then(|| replication_group.attr("auth_token")),
                sensitive: true,
            },
        ),
    ])
}

/// Render the document as pretty JSON
pub fn to_json(document: &TerraformDocument) -> ElasticacheResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the document to `<outdir>/stacks/<stack_id>/cdk.tf.json`
pub fn write_stack(
    document: &TerraformDocument,
    outdir: &Path,
    stack_id: &str,
) -> ElasticacheResult<PathBuf> {
    let dir = outdir.join("stacks").join(stack_id);
    std::fs::create_dir_all(&dir).map_err(|e| ElasticacheError::io(&dir, e))?;

    let path = dir.join("cdk.tf.json");
    std::fs::write(&path, to_json(document)?).map_err(|e| ElasticacheError::io(&path, e))?;
    info!("Wrote stack {} to {}", stack_id, path.display());
    Ok(path)
}
