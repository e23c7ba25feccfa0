use decl_file::{new_id, Content, Implementation, Service, ServicePackage, ServiceVersion};
use tracing::debug;

use super::TransformError;
use crate::format::Format;

/// Version label given to the single version of every generated package.
pub const INITIAL_VERSION: &str = "v1";

/// Converts a gateway service into a control-plane service package.
///
/// The package takes the service's name. Its only version embeds a copy of
/// the service with the name removed and a freshly generated id; embedded
/// services are identified by id only. All other service fields are carried
/// over unchanged.
///
/// # Errors
///
/// Returns [`TransformError::UnnamedService`] if the service has no name
/// (absent or empty).
pub fn to_service_package(service: &Service) -> Result<ServicePackage, TransformError> {
    let Some(service_name) = service.name().map(str::to_string) else {
        return Err(TransformError::UnnamedService {
            id: service.id.clone().unwrap_or_else(|| "<none>".to_string()),
            from: Format::Gateway,
            to: Format::ControlPlane,
        });
    };

    let mut embedded = service.clone();
    embedded.name = None;
    embedded.id = Some(new_id());

    debug!(
        service = %service_name,
        previous_id = service.id.as_deref().unwrap_or("<none>"),
        new_id = embedded.id.as_deref().unwrap_or_default(),
        "converted service into service package"
    );

    Ok(ServicePackage {
        description: Some(placeholder_description(&service_name)),
        name: Some(service_name),
        versions: vec![ServiceVersion {
            version: Some(INITIAL_VERSION.to_string()),
            implementation: Some(Implementation::Gateway {
                service: Box::new(embedded),
            }),
            ..ServiceVersion::default()
        }],
        ..ServicePackage::default()
    })
}

/// Converts a whole gateway document into control-plane format.
///
/// Every service becomes a service package appended after any packages the
/// document already has, in service order; the services collection ends up
/// empty. All other top-level keys are left as loaded. The first unnamed
/// service aborts the conversion.
pub fn gateway_to_control_plane(source: &Content) -> Result<Content, TransformError> {
    let mut out = source.clone();
    let services = std::mem::take(&mut out.services);

    let packages = services
        .iter()
        .map(to_service_package)
        .collect::<Result<Vec<_>, _>>()?;
    out.service_packages.extend(packages);

    Ok(out)
}

fn placeholder_description(service_name: &str) -> String {
    format!("placeholder description for {service_name} service package")
}
