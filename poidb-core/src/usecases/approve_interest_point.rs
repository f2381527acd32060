use super::prelude::*;

/// Approves a specific revision of an interest point.
pub fn approve_interest_point<R>(
    repo: &R,
    id: &str,
    version: Revision,
    approver: &User,
) -> Result<InterestPoint>
where
    R: InterestPointRepoMut,
{
    let mut interest_point = repo.get_interest_point(id)?;
    if interest_point.revision != version {
        log::info!(
            "Rejecting approval of interest point {id} (revision {version}, current: {})",
            interest_point.revision
        );
        return Err(Error::InvalidVersion);
    }
    interest_point.approval = Some(Approval::now(approver.id));
    repo.update_interest_point(&interest_point, version)?;
    log::info!(
        "Interest point {id} (revision {version}) approved by {}",
        approver.id
    );
    Ok(interest_point)
}
