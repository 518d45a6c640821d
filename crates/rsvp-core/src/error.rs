//! Error types for `rsvp-core`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  record::Field,
  store::{StoreError, StoreErrorKind},
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("record store is not configured or unreachable")]
  StoreUnavailable,

  #[error("missing required field: {0}")]
  MissingRequiredField(Field),

  #[error("phone and identity number are required when attending")]
  MissingContactInfo,

  #[error("phone number has an invalid format")]
  InvalidPhoneFormat,

  #[error("identity number must be 1 to 8 digits")]
  InvalidIdentityFormat,

  #[error("an RSVP with this identity number already exists")]
  DuplicateIdentity,

  #[error("failed to fetch RSVPs: {0}")]
  Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("failed to store RSVP: {0}")]
  Write(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Map a store failure on the read path.
  pub fn fetch<E: StoreError>(e: E) -> Self {
    match e.kind() {
      StoreErrorKind::Unavailable => Self::StoreUnavailable,
      _ => Self::Fetch(Box::new(e)),
    }
  }

  /// Map a store failure on the submission path. A uniqueness violation
  /// reported by the store is the authoritative duplicate signal.
  pub fn write<E: StoreError>(e: E) -> Self {
    match e.kind() {
      StoreErrorKind::Unavailable => Self::StoreUnavailable,
      StoreErrorKind::DuplicateIdentity => Self::DuplicateIdentity,
      StoreErrorKind::Other => Self::Write(Box::new(e)),
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::StoreUnavailable => ErrorKind::StoreUnavailable,
      Self::MissingRequiredField(_) => ErrorKind::MissingRequiredField,
      Self::MissingContactInfo => ErrorKind::MissingContactInfo,
      Self::InvalidPhoneFormat => ErrorKind::InvalidPhoneFormat,
      Self::InvalidIdentityFormat => ErrorKind::InvalidIdentityFormat,
      Self::DuplicateIdentity => ErrorKind::DuplicateIdentity,
      Self::Fetch(_) => ErrorKind::FetchError,
      Self::Write(_) => ErrorKind::WriteError,
    }
  }

  /// `true` for failures the guest can fix by editing the form.
  pub fn is_user_correctable(&self) -> bool { self.kind().is_user_correctable() }
}

/// Stable, serialisable discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
  StoreUnavailable,
  MissingRequiredField,
  MissingContactInfo,
  InvalidPhoneFormat,
  InvalidIdentityFormat,
  DuplicateIdentity,
  FetchError,
  WriteError,
}

impl ErrorKind {
  pub fn is_user_correctable(self) -> bool {
    matches!(
      self,
      Self::MissingRequiredField
        | Self::MissingContactInfo
        | Self::InvalidPhoneFormat
        | Self::InvalidIdentityFormat
        | Self::DuplicateIdentity
    )
  }

  /// The notice shown to the guest or admin.
  pub fn user_message(self) -> &'static str {
    match self {
      Self::StoreUnavailable => "No se pudo conectar a la base de datos.",
      Self::MissingRequiredField => {
        "Por favor completa todos los campos obligatorios."
      }
      Self::MissingContactInfo => {
        "Por favor debes proporcionar un teléfono de contacto y cédula si \
         confirmas tu asistencia."
      }
      Self::InvalidPhoneFormat => {
        "Por favor ingresa un número de teléfono válido."
      }
      Self::InvalidIdentityFormat => {
        "Por favor ingresa una cédula válida (hasta 8 dígitos)."
      }
      Self::DuplicateIdentity => "Ya existe una confirmación con esta cédula.",
      Self::FetchError => "Error al cargar las confirmaciones.",
      Self::WriteError => {
        "Error al enviar la confirmación. Inténtalo nuevamente."
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
