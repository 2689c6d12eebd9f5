use uuid::Uuid;

use crate::{error::report::ReportError, model::auth::Caller};

/// The single ownership rule: a record may be mutated by its owner or by an
/// admin, never by anyone else.
pub fn ensure_can_modify(caller: &Caller, owner_id: Uuid) -> Result<(), ReportError> {
    if caller.is_admin() || caller.id == owner_id {
        Ok(())
    } else {
        Err(ReportError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use pulseboard_test_utils::prelude::*;
    use uuid::Uuid;

    use crate::{
        error::report::ReportError, model::auth::Caller,
        service::report::access::ensure_can_modify,
    };

    #[test]
    fn owner_may_modify_own_record() {
        let caller = Caller::from_profile(&factory::mock_profile_model(
            entity::profile::Role::Staff,
        ));

        assert!(ensure_can_modify(&caller, caller.id).is_ok());
    }

    #[test]
    fn staff_may_not_modify_another_owners_record() {
        let caller = Caller::from_profile(&factory::mock_profile_model(
            entity::profile::Role::Staff,
        ));

        let result = ensure_can_modify(&caller, Uuid::new_v4());

        assert_eq!(result, Err(ReportError::Forbidden));
    }

    #[test]
    fn admin_may_modify_any_record() {
        let caller = Caller::from_profile(&factory::mock_profile_model(
            entity::profile::Role::Admin,
        ));

        assert!(ensure_can_modify(&caller, Uuid::new_v4()).is_ok());
    }
}
