multiversx_sc::imports!();

use crate::config::PRIV_UPDATE_RESOLUTION_REQUIREMENTS;
use crate::errors::*;
use crate::math::PPM;
use crate::types::ResolutionRequirement;

#[multiversx_sc::module]
pub trait RequirementsModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::config::ConfigModule
{
    // ========================================================
    // ENDPOINT: updateResolutionRequirements
    // Batch update of per (target, method) approval policies.
    // Zeroing a non-wildcard entry clears it back to the
    // wildcard default; the wildcard itself can never be zeroed.
    // ========================================================

    #[endpoint(updateResolutionRequirements)]
    fn update_resolution_requirements(
        &self,
        requirements: MultiValueEncoded<MultiValue5<ManagedAddress, ManagedBuffer, u64, u64, u64>>,
    ) {
        self.require_privilege(PRIV_UPDATE_RESOLUTION_REQUIREMENTS);

        for entry in requirements {
            let (target, method, majority, quorum, execution_threshold) = entry.into_tuple();
            require!(
                majority <= PPM && quorum <= PPM && execution_threshold <= PPM,
                ERR_REQUIREMENT_TOO_HIGH
            );

            let requirement = ResolutionRequirement {
                majority,
                quorum,
                execution_threshold,
            };
            if self.is_wildcard(&target, &method) {
                // The universal default must keep a real guard, otherwise a
                // single bad update could disable every execution check.
                require!(majority > 0 && quorum > 0, ERR_WILDCARD_REQUIREMENT_ZERO);
                self.resolution_requirement(&target, &method).set(requirement);
            } else if majority == 0 && quorum == 0 && execution_threshold == 0 {
                self.resolution_requirement(&target, &method).clear();
            } else {
                self.resolution_requirement(&target, &method).set(requirement);
            }

            self.resolution_requirement_updated_event(&target, &method, &requirement);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Effective requirement for a call, falling back to the wildcard
    /// default when no exact entry is configured.
    #[view(getResolutionRequirement)]
    fn get_resolution_requirement(
        &self,
        target: ManagedAddress,
        method: ManagedBuffer,
    ) -> ResolutionRequirement {
        self.requirement_for(&target, &method)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn requirement_for(
        &self,
        target: &ManagedAddress,
        method: &ManagedBuffer,
    ) -> ResolutionRequirement {
        let exact = self.resolution_requirement(target, method);
        if !exact.is_empty() {
            return exact.get();
        }
        self.resolution_requirement(&ManagedAddress::zero(), &ManagedBuffer::new())
            .get()
    }

    fn is_wildcard(&self, target: &ManagedAddress, method: &ManagedBuffer) -> bool {
        target == &ManagedAddress::zero() && method.is_empty()
    }
}
