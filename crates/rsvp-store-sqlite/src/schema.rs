//! SQL schema for the RSVP SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Append-only: no UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS rsvps (
    id              TEXT PRIMARY KEY,
    first_name      TEXT NOT NULL,
    last_name       TEXT NOT NULL,
    phone           TEXT,            -- digits only; NULL when not attending
    identity_number TEXT,            -- digits only; NULL when not attending
    attending       TEXT NOT NULL CHECK (attending IN ('yes', 'no')),
    created_at      TEXT NOT NULL    -- RFC 3339 UTC, fixed width; server-assigned
);

-- At most one RSVP per identity number.
CREATE UNIQUE INDEX IF NOT EXISTS rsvps_identity_idx
    ON rsvps(identity_number) WHERE identity_number IS NOT NULL;

CREATE INDEX IF NOT EXISTS rsvps_created_idx ON rsvps(created_at);

PRAGMA user_version = 1;
";
