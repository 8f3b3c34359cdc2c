// Stable error codes, grouped by category. The category prefix is part of
// the compatibility surface: client software branches on it.

// ── authorization ──

pub const ERR_NOT_AUTHORIZED: &str = "auth: caller lacks the required privilege";
pub const ERR_PROPOSAL_THRESHOLD: &str = "auth: weight below the proposal threshold";
pub const ERR_NOT_AUTHOR: &str = "auth: caller is not the proposal author";
pub const ERR_NOT_SPONSOR: &str = "auth: caller is not an active sponsor of the voter";
pub const ERR_VOTER_SELF_MANAGED: &str = "auth: voter is self-managed";
pub const ERR_NO_VOTING_WEIGHT: &str = "auth: voter has no voting weight";

// ── timing ──

pub const ERR_SESSION_NOT_OPEN: &str = "timing: no session in PLANNED or CAMPAIGN state";
pub const ERR_SESSION_NOT_VOTING: &str = "timing: no session in VOTING state";
pub const ERR_SESSION_NOT_EXECUTABLE: &str = "timing: session not in EXECUTION or GRACE state";
pub const ERR_SESSION_NOT_CLOSED: &str = "timing: session not yet CLOSED";
pub const ERR_SPONSOR_EXPIRED: &str = "timing: sponsorship has expired";

// ── validation ──

pub const ERR_PERIOD_OUT_OF_BOUNDS: &str = "validation: period outside protocol bounds";
pub const ERR_INVALID_PROPOSAL_CAPS: &str = "validation: inconsistent proposal caps";
pub const ERR_REQUIREMENT_TOO_HIGH: &str = "validation: requirement above 100%";
pub const ERR_WILDCARD_REQUIREMENT_ZERO: &str = "validation: wildcard requirement cannot be cleared";
pub const ERR_UNKNOWN_SESSION: &str = "validation: unknown session id";
pub const ERR_UNKNOWN_PROPOSAL: &str = "validation: unknown proposal id";
pub const ERR_INVALID_DEPENDENCY: &str = "validation: dependsOn references an invalid proposal";
pub const ERR_INVALID_ALTERNATIVE: &str = "validation: alternativeOf references an invalid proposal";
pub const ERR_BLANK_TARGET: &str = "validation: resolution action without a target";
pub const ERR_EMPTY_VOTE: &str = "validation: vote bitmask selects no proposal";
pub const ERR_VOTE_OUT_OF_RANGE: &str = "validation: vote bitmask selects an undefined proposal";
pub const ERR_PROPOSAL_CANCELLED: &str = "validation: proposal is cancelled";
pub const ERR_ALTERNATIVE_CONFLICT: &str = "validation: vote selects two alternative proposals";
pub const ERR_NOT_APPROVED: &str = "validation: proposal is not approved";
pub const ERR_EXECUTION_THRESHOLD: &str = "validation: approvals below the execution threshold";
pub const ERR_SPONSOR_UNTIL_PAST: &str = "validation: sponsorship expiry is in the past";
pub const ERR_NO_SESSION_TO_ARCHIVE: &str = "validation: no retained session to archive";

// ── double-action ──

pub const ERR_ALREADY_VOTED: &str = "double-action: voter already voted this session";
pub const ERR_ALREADY_EXECUTED: &str = "double-action: resolution already executed";
pub const ERR_ALREADY_CANCELLED: &str = "double-action: proposal already cancelled";

// ── ordering ──

pub const ERR_DEPENDENCY_NOT_RESOLVED: &str = "ordering: dependency not resolved yet";

// ── capacity ──

pub const ERR_TOO_MANY_PROPOSALS: &str = "capacity: proposal cap reached";
