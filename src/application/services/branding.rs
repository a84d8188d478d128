//! Branding configuration: load, update, export and import
//!
//! Every document that enters the service, persisted or imported, goes
//! through the same parse, normalize and validate path.

use tracing::{info, warn};
use validator::Validate;

use crate::domain::{BrandingConfig, DomainError, DomainResult, Module, ModuleAccessTable, User};
use crate::infrastructure::storage::{KeyValueStorage, STORAGE_KEY_BRANDING};
use crate::shared::{describe_validation_errors, AppResult};

#[derive(Debug, Clone)]
pub struct BrandingService {
    config: BrandingConfig,
}

impl BrandingService {
    pub fn new(config: BrandingConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    /// Read the persisted snapshot. Anything missing or unreadable falls
    /// back to `defaults`.
    pub fn load(storage: &dyn KeyValueStorage, defaults: BrandingConfig) -> Self {
        let config = match storage.get(STORAGE_KEY_BRANDING) {
            Ok(Some(raw)) => match parse_document(&raw) {
                Ok(config) => {
                    info!(hotel = %config.hotel_name, time_zone = %config.time_zone, "Branding loaded");
                    config
                }
                Err(e) => {
                    warn!("Stored branding ignored: {}", e);
                    defaults
                }
            },
            Ok(None) => defaults,
            Err(e) => {
                warn!("Branding storage unreadable: {}", e);
                defaults
            }
        };
        Self::new(config)
    }

    pub fn config(&self) -> &BrandingConfig {
        &self.config
    }

    /// Validate, normalize and persist a new configuration.
    pub fn update(
        &mut self,
        storage: &mut dyn KeyValueStorage,
        actor: &User,
        config: BrandingConfig,
    ) -> AppResult<&BrandingConfig> {
        ensure_admin(actor)?;
        let config = config.normalized();
        config
            .validate()
            .map_err(|e| DomainError::Validation(describe_validation_errors(&e)))?;

        self.replace(storage, config)?;
        info!(user = %actor.username, hotel = %self.config.hotel_name, "Branding updated");
        Ok(&self.config)
    }

    /// Pretty-printed JSON document of the current configuration.
    pub fn export(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }

    /// Replace the configuration with an exported document.
    ///
    /// The document is fully parsed and validated first; on any failure
    /// the current configuration is left as it was.
    pub fn import(
        &mut self,
        storage: &mut dyn KeyValueStorage,
        actor: &User,
        document: &str,
    ) -> AppResult<&BrandingConfig> {
        ensure_admin(actor)?;
        let config = parse_document(document).inspect_err(|e| {
            warn!(user = %actor.username, "Branding import rejected: {}", e);
        })?;

        self.replace(storage, config)?;
        info!(user = %actor.username, hotel = %self.config.hotel_name, "Branding imported");
        Ok(&self.config)
    }

    // Persist before swapping so a storage failure leaves memory untouched.
    fn replace(&mut self, storage: &mut dyn KeyValueStorage, config: BrandingConfig) -> AppResult<()> {
        let json = serde_json::to_string(&config)?;
        storage.set(STORAGE_KEY_BRANDING, &json)?;
        self.config = config;
        Ok(())
    }
}

fn ensure_admin(actor: &User) -> DomainResult<()> {
    if ModuleAccessTable::can_access(actor.role(), Module::Admin) {
        Ok(())
    } else {
        Err(DomainError::AccessDenied {
            role: actor.role().to_string(),
            module: Module::Admin.to_string(),
        })
    }
}

fn parse_document(document: &str) -> DomainResult<BrandingConfig> {
    let config: BrandingConfig = serde_json::from_str(document)
        .map_err(|e| DomainError::MalformedImport(e.to_string()))?;
    let config = config.normalized();
    config
        .validate()
        .map_err(|e| DomainError::MalformedImport(describe_validation_errors(&e)))?;
    Ok(config)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Department, Role, ShiftType};
    use crate::infrastructure::MemoryKeyValueStorage;
    use crate::shared::AppError;

    fn admin() -> User {
        User::new("Ada", "ada", Role::Admin, Department::Management, ShiftType::Morning)
    }

    #[test]
    fn load_applies_zone_fix_up() {
        let mut kv = MemoryKeyValueStorage::new();
        let stored = BrandingConfig {
            hotel_name: "Taj View".into(),
            time_zone: "Asia/Mumbai".into(),
            ..Default::default()
        };
        kv.set(STORAGE_KEY_BRANDING, &serde_json::to_string(&stored).unwrap()).unwrap();

        let svc = BrandingService::load(&kv, BrandingConfig::default());
        assert_eq!(svc.config().hotel_name, "Taj View");
        assert_eq!(svc.config().time_zone, "Asia/Kolkata");
    }

    #[test]
    fn unreadable_snapshot_falls_back_to_defaults() {
        let mut kv = MemoryKeyValueStorage::new();
        kv.set(STORAGE_KEY_BRANDING, "{not json").unwrap();
        let svc = BrandingService::load(&kv, BrandingConfig::default());
        assert_eq!(svc.config(), &BrandingConfig::default());
    }

    #[test]
    fn update_normalizes_and_persists() {
        let mut kv = MemoryKeyValueStorage::new();
        let mut svc = BrandingService::new(BrandingConfig::default());
        let next = BrandingConfig {
            time_zone: "Asia/Mumbai".into(),
            preferred_currency: "inr".into(),
            ..Default::default()
        };
        svc.update(&mut kv, &admin(), next).unwrap();

        assert_eq!(svc.config().time_zone, "Asia/Kolkata");
        let raw = kv.get(STORAGE_KEY_BRANDING).unwrap().unwrap();
        assert!(raw.contains("\"timeZone\":\"Asia/Kolkata\""));
        assert!(raw.contains("\"preferredCurrency\":\"INR\""));
    }

    #[test]
    fn update_requires_admin_module() {
        let mut kv = MemoryKeyValueStorage::new();
        let mut svc = BrandingService::new(BrandingConfig::default());
        let clerk = User::new("Raj", "raj", Role::FrontDesk, Department::FrontOffice, ShiftType::Morning);
        let err = svc.update(&mut kv, &clerk, BrandingConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::AccessDenied { .. })));
        assert_eq!(kv.get(STORAGE_KEY_BRANDING).unwrap(), None);
    }

    #[test]
    fn export_then_import() {
        let mut kv = MemoryKeyValueStorage::new();
        let source = BrandingService::new(BrandingConfig {
            hotel_name: "Alpine Lodge".into(),
            time_zone: "Europe/Kiev".into(),
            ..Default::default()
        });
        let document = source.export().unwrap();
        assert!(document.contains('\n'));

        let mut target = BrandingService::new(BrandingConfig::default());
        target.import(&mut kv, &admin(), &document).unwrap();
        assert_eq!(target.config().hotel_name, "Alpine Lodge");
        assert_eq!(target.config().time_zone, "Europe/Kyiv");
        assert!(kv.get(STORAGE_KEY_BRANDING).unwrap().is_some());
    }

    #[test]
    fn import_missing_field_leaves_config_unchanged() {
        let mut kv = MemoryKeyValueStorage::new();
        let mut svc = BrandingService::new(BrandingConfig::default());
        let before = svc.export().unwrap();

        let mut doc: serde_json::Value = serde_json::from_str(&before).unwrap();
        doc.as_object_mut().unwrap().remove("hotelName");
        let err = svc.import(&mut kv, &admin(), &doc.to_string()).unwrap_err();

        match err {
            AppError::Domain(DomainError::MalformedImport(msg)) => assert!(msg.contains("hotelName")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(svc.export().unwrap(), before);
        assert_eq!(kv.get(STORAGE_KEY_BRANDING).unwrap(), None);
    }

    #[test]
    fn import_rejects_invalid_values() {
        let mut kv = MemoryKeyValueStorage::new();
        let mut svc = BrandingService::new(BrandingConfig::default());
        let mut doc = serde_json::to_value(BrandingConfig::default()).unwrap();
        doc["checkInTime"] = serde_json::json!("25:99");
        let err = svc.import(&mut kv, &admin(), &doc.to_string()).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::MalformedImport(_))));
        assert_eq!(svc.config(), &BrandingConfig::default());
    }
}
