//! engine::transitions
//!
//! One handler per supported subcommand.
//!
//! # Design
//!
//! Handlers are pure functions: they take the snapshot by value, apply
//! one transition, and return the output text plus the (possibly
//! unchanged) new snapshot. Every failure is an [`EngineError`]; the
//! dispatcher maps it to a `success: false` outcome and hands the
//! caller's original snapshot back untouched.
//!
//! Guard order follows the simulator's documented semantics: repository
//! presence first, then HEAD shape, then argument validation.

use crate::core::config::AuthorConfig;
use crate::core::snapshot::{Branch, Commit, Head, RepositorySnapshot};
use crate::core::types::{BranchName, CommitId, Signature};

use super::error::EngineError;
use super::ident::IdGenerator;

/// Result of a successful transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub output: String,
    pub state: Option<RepositorySnapshot>,
}

/// `init`: create a repository, or report that one already exists.
/// The only transition that cannot fail.
pub fn init(state: Option<RepositorySnapshot>, default_branch: &BranchName) -> Transition {
    match state {
        Some(snapshot) => Transition {
            output: "Reinitialized existing Git repository".to_string(),
            state: Some(snapshot),
        },
        None => Transition {
            output: "Initialized empty Git repository".to_string(),
            state: Some(RepositorySnapshot::initial(default_branch.clone())),
        },
    }
}

/// `status`: report the checked-out branch and working-tree state.
pub fn status(state: Option<RepositorySnapshot>) -> Result<Transition, EngineError> {
    let snapshot = state.ok_or(EngineError::NotARepository)?;

    let label = match &snapshot.head {
        Some(Head::Branch { ref_name, .. }) => ref_name.to_string(),
        _ => "(detached HEAD)".to_string(),
    };
    let output = if snapshot.commits.is_empty() {
        format!(
            "On branch {label}\n\nNo commits yet\n\nnothing to commit (create/copy files and use \"git add\" to track)"
        )
    } else {
        format!("On branch {label}\nnothing to commit, working tree clean")
    };

    Ok(Transition {
        output,
        state: Some(snapshot),
    })
}

/// `clear`: discard the repository entirely.
pub fn clear(state: Option<RepositorySnapshot>) -> Result<Transition, EngineError> {
    if state.is_none() {
        return Err(EngineError::NotARepository);
    }
    Ok(Transition {
        output: String::new(),
        state: None,
    })
}

/// `commit -m <message>`: append a commit and advance branch and HEAD.
pub fn commit(
    state: Option<RepositorySnapshot>,
    args: &[String],
    ids: &dyn IdGenerator,
    author: &AuthorConfig,
) -> Result<Transition, EngineError> {
    let mut snapshot = state.ok_or(EngineError::NotARepository)?;

    let ref_name = match &snapshot.head {
        Some(Head::Branch { ref_name, .. }) => ref_name.clone(),
        _ => return Err(EngineError::DetachedHead),
    };
    let parent = match snapshot.branch(&ref_name) {
        Some(branch) => branch.commit_id.clone(),
        None => {
            return Err(EngineError::CurrentBranchUnresolvable {
                name: ref_name.to_string(),
            })
        }
    };
    let message = commit_message(args)?;
    let parents: Vec<CommitId> = parent.into_iter().collect();

    let id = ids.next_id();
    let signature = Signature::now(author.name.clone(), author.email.clone());
    snapshot.commits.push(Commit {
        id: id.clone(),
        parents,
        author: signature.clone(),
        committer: signature,
        message: message.clone(),
        branch: ref_name.clone(),
    });
    if let Some(branch) = snapshot.branch_mut(&ref_name) {
        branch.commit_id = Some(id.clone());
    }
    snapshot.head = Some(Head::Branch {
        ref_name: ref_name.clone(),
        commit_id: Some(id.clone()),
    });

    Ok(Transition {
        output: format!("[{} {}] {}", ref_name, id.short(7), message),
        state: Some(snapshot),
    })
}

/// `branch` / `branch <name>`: list branches, or create one at the
/// current branch's commit.
pub fn branch(
    state: Option<RepositorySnapshot>,
    args: &[String],
) -> Result<Transition, EngineError> {
    let mut snapshot = state.ok_or(EngineError::NotARepository)?;

    let current = match &snapshot.head {
        Some(Head::Branch { ref_name, .. }) => ref_name.clone(),
        _ => return Err(EngineError::DetachedHead),
    };

    if args.is_empty() {
        let listing: Vec<String> = snapshot
            .branches
            .iter()
            .map(|b| {
                if b.name == current {
                    format!("* {}", b.name)
                } else {
                    format!("  {}", b.name)
                }
            })
            .collect();
        return Ok(Transition {
            output: listing.join("\n"),
            state: Some(snapshot),
        });
    }

    let raw = &args[0];
    if snapshot.has_branch(raw) {
        return Err(EngineError::BranchAlreadyExists { name: raw.clone() });
    }
    let name = BranchName::new(raw.clone())
        .map_err(|_| EngineError::InvalidBranchName { name: raw.clone() })?;

    let tip = match snapshot.branch(&current) {
        Some(branch) => branch.commit_id.clone(),
        None => {
            return Err(EngineError::CurrentBranchUnresolvable {
                name: current.to_string(),
            })
        }
    };
    let tip = tip.ok_or(EngineError::NoValidCommitToBranchFrom)?;

    snapshot.branches.push(Branch {
        name,
        commit_id: Some(tip),
    });
    Ok(Transition {
        output: String::new(),
        state: Some(snapshot),
    })
}

/// `checkout` / `checkout <branch>`: report the current branch, or move
/// HEAD onto an existing branch. This variant never creates branches.
pub fn checkout(
    state: Option<RepositorySnapshot>,
    args: &[String],
) -> Result<Transition, EngineError> {
    let mut snapshot = state.ok_or(EngineError::NotARepository)?;

    let current = match &snapshot.head {
        Some(Head::Branch { ref_name, .. }) => ref_name.clone(),
        _ => return Err(EngineError::DetachedHead),
    };

    if args.is_empty() {
        return Ok(Transition {
            output: format!("Your branch is up to date with '{current}'"),
            state: Some(snapshot),
        });
    }

    let target = &args[0];
    let found = snapshot
        .branches
        .iter()
        .find(|b| b.name.as_str() == target.as_str())
        .map(|b| (b.name.clone(), b.commit_id.clone()));
    match found {
        Some((name, commit_id)) => {
            snapshot.head = Some(Head::Branch {
                ref_name: name.clone(),
                commit_id,
            });
            Ok(Transition {
                output: format!("Switched to branch '{name}'"),
                state: Some(snapshot),
            })
        }
        None => Err(EngineError::BranchNotFound {
            name: target.clone(),
        }),
    }
}

/// `switch <branch>` / `switch -c <name>` / `switch <commitId>`: move
/// HEAD to a branch, create-and-switch, or detach onto a commit.
pub fn switch(
    state: Option<RepositorySnapshot>,
    args: &[String],
) -> Result<Transition, EngineError> {
    let mut snapshot = state.ok_or(EngineError::NotARepository)?;

    if args.is_empty() {
        return Err(EngineError::MissingTarget);
    }

    if args[0] == "-c" {
        let raw = args.get(1).ok_or(EngineError::MissingTarget)?;
        if snapshot.has_branch(raw) {
            return Err(EngineError::BranchAlreadyExists { name: raw.clone() });
        }
        let name = BranchName::new(raw.clone())
            .map_err(|_| EngineError::InvalidBranchName { name: raw.clone() })?;

        // Resolve the commit the new branch starts from: the current
        // branch's tip, or the detached commit itself.
        let tip = match &snapshot.head {
            Some(Head::Branch { ref_name, .. }) => match snapshot.branch(ref_name) {
                Some(branch) => branch.commit_id.clone(),
                None => {
                    return Err(EngineError::CurrentBranchUnresolvable {
                        name: ref_name.to_string(),
                    })
                }
            },
            Some(Head::Detached { commit_id }) => Some(commit_id.clone()),
            None => None,
        };

        snapshot.branches.push(Branch {
            name: name.clone(),
            commit_id: tip.clone(),
        });
        snapshot.head = Some(Head::Branch {
            ref_name: name.clone(),
            commit_id: tip,
        });
        return Ok(Transition {
            output: format!("Switched to a new branch '{name}'"),
            state: Some(snapshot),
        });
    }

    let target = &args[0];
    let found = snapshot
        .branches
        .iter()
        .find(|b| b.name.as_str() == target.as_str())
        .map(|b| (b.name.clone(), b.commit_id.clone()));
    if let Some((name, commit_id)) = found {
        snapshot.head = Some(Head::Branch {
            ref_name: name.clone(),
            commit_id,
        });
        return Ok(Transition {
            output: format!("Switched to branch '{name}'"),
            state: Some(snapshot),
        });
    }

    if let Some(id) = snapshot.find_commit(target).map(|c| c.id.clone()) {
        snapshot.head = Some(Head::Detached {
            commit_id: id.clone(),
        });
        return Ok(Transition {
            output: format!("Note: switching to detached HEAD '{id}'"),
            state: Some(snapshot),
        });
    }

    Err(EngineError::InvalidReference {
        target: target.clone(),
    })
}

/// Extract the commit message: everything after `-m`, space-joined,
/// with one pair of matching surrounding quotes stripped.
fn commit_message(args: &[String]) -> Result<String, EngineError> {
    let flag = args
        .iter()
        .position(|a| a == "-m")
        .ok_or(EngineError::MissingCommitMessage)?;
    let raw = args[flag + 1..].join(" ");
    let message = strip_quotes(&raw);
    if message.is_empty() {
        return Err(EngineError::MissingCommitMessage);
    }
    Ok(message.to_string())
}

fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::verify::verify;
    use crate::engine::ident::SequentialIdGenerator;

    fn main_branch() -> BranchName {
        BranchName::new("main").unwrap()
    }

    fn author() -> AuthorConfig {
        AuthorConfig::default()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    /// A repository with one commit on main.
    fn repo_with_commit() -> RepositorySnapshot {
        let ids = SequentialIdGenerator::default();
        let initialized = init(None, &main_branch()).state;
        commit(initialized, &args(&["-m", "first"]), &ids, &author())
            .unwrap()
            .state
            .unwrap()
    }

    mod init_transition {
        use super::*;

        #[test]
        fn creates_unborn_default_branch() {
            let transition = init(None, &main_branch());
            assert_eq!(transition.output, "Initialized empty Git repository");
            let snapshot = transition.state.unwrap();
            assert!(snapshot.commits.is_empty());
            assert_eq!(snapshot.branches.len(), 1);
            assert!(snapshot.branches[0].commit_id.is_none());
            assert_eq!(snapshot.current_branch(), Some(&main_branch()));
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn reinit_preserves_existing_state() {
            let existing = repo_with_commit();
            let transition = init(Some(existing.clone()), &main_branch());
            assert_eq!(transition.output, "Reinitialized existing Git repository");
            assert_eq!(transition.state, Some(existing));
        }
    }

    mod status_transition {
        use super::*;

        #[test]
        fn requires_a_repository() {
            assert_eq!(status(None), Err(EngineError::NotARepository));
        }

        #[test]
        fn fresh_repository_has_no_commits_yet() {
            let snapshot = init(None, &main_branch()).state;
            let transition = status(snapshot).unwrap();
            assert!(transition.output.starts_with("On branch main"));
            assert!(transition.output.contains("No commits yet"));
            assert!(transition.output.contains("nothing to commit"));
        }

        #[test]
        fn clean_tree_after_commit() {
            let transition = status(Some(repo_with_commit())).unwrap();
            assert_eq!(
                transition.output,
                "On branch main\nnothing to commit, working tree clean"
            );
        }

        #[test]
        fn detached_head_label() {
            let mut snapshot = repo_with_commit();
            let id = snapshot.commits[0].id.clone();
            snapshot.head = Some(Head::Detached { commit_id: id });
            let transition = status(Some(snapshot)).unwrap();
            assert!(transition.output.starts_with("On branch (detached HEAD)"));
        }
    }

    mod clear_transition {
        use super::*;

        #[test]
        fn requires_a_repository() {
            assert_eq!(clear(None), Err(EngineError::NotARepository));
        }

        #[test]
        fn discards_the_snapshot() {
            let transition = clear(Some(repo_with_commit())).unwrap();
            assert_eq!(transition.output, "");
            assert!(transition.state.is_none());
        }
    }

    mod commit_transition {
        use super::*;

        #[test]
        fn requires_a_repository() {
            let ids = SequentialIdGenerator::default();
            assert_eq!(
                commit(None, &args(&["-m", "x"]), &ids, &author()),
                Err(EngineError::NotARepository)
            );
        }

        #[test]
        fn first_commit_has_no_parents() {
            let ids = SequentialIdGenerator::default();
            let snapshot = init(None, &main_branch()).state;
            let transition = commit(snapshot, &args(&["-m", "first"]), &ids, &author()).unwrap();
            let snapshot = transition.state.unwrap();

            assert_eq!(snapshot.commits.len(), 1);
            assert!(snapshot.commits[0].parents.is_empty());
            let id = snapshot.commits[0].id.clone();
            assert_eq!(snapshot.branches[0].commit_id, Some(id.clone()));
            assert_eq!(snapshot.head.as_ref().unwrap().commit_id(), Some(&id));
            assert_eq!(transition.output, format!("[main {}] first", id.short(7)));
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn second_commit_chains_to_the_first() {
            // repo_with_commit() consumes id 0 from its own generator; seed
            // this one past it so the second commit gets a distinct id.
            let ids = SequentialIdGenerator::starting_at(1);
            let snapshot = Some(repo_with_commit());
            let first = snapshot.as_ref().unwrap().commits[0].id.clone();
            let transition = commit(snapshot, &args(&["-m", "second"]), &ids, &author()).unwrap();
            let snapshot = transition.state.unwrap();

            assert_eq!(snapshot.commits.len(), 2);
            assert_eq!(snapshot.commits[1].parents, vec![first]);
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn message_is_required() {
            let ids = SequentialIdGenerator::default();
            let snapshot = init(None, &main_branch()).state;
            assert_eq!(
                commit(snapshot.clone(), &args(&[]), &ids, &author()),
                Err(EngineError::MissingCommitMessage)
            );
            assert_eq!(
                commit(snapshot, &args(&["-m"]), &ids, &author()),
                Err(EngineError::MissingCommitMessage)
            );
        }

        #[test]
        fn quoted_message_is_unwrapped_and_joined() {
            let ids = SequentialIdGenerator::default();
            let snapshot = init(None, &main_branch()).state;
            let transition = commit(
                snapshot,
                &args(&["-m", "\"fix", "the", "bug\""]),
                &ids,
                &author(),
            )
            .unwrap();
            let snapshot = transition.state.unwrap();
            assert_eq!(snapshot.commits[0].message, "fix the bug");
        }

        #[test]
        fn detached_head_cannot_commit() {
            let ids = SequentialIdGenerator::default();
            let mut snapshot = repo_with_commit();
            let id = snapshot.commits[0].id.clone();
            snapshot.head = Some(Head::Detached { commit_id: id });
            assert_eq!(
                commit(Some(snapshot), &args(&["-m", "x"]), &ids, &author()),
                Err(EngineError::DetachedHead)
            );
        }
    }

    mod branch_transition {
        use super::*;

        #[test]
        fn listing_marks_the_current_branch() {
            let snapshot = repo_with_commit();
            let snapshot = branch(Some(snapshot), &args(&["feature"]))
                .unwrap()
                .state
                .unwrap();
            let transition = branch(Some(snapshot), &args(&[])).unwrap();
            assert_eq!(transition.output, "* main\n  feature");
        }

        #[test]
        fn new_branch_points_at_current_tip() {
            let snapshot = repo_with_commit();
            let tip = snapshot.branches[0].commit_id.clone();
            let transition = branch(Some(snapshot), &args(&["feature"])).unwrap();
            assert_eq!(transition.output, "");
            let snapshot = transition.state.unwrap();
            let feature = snapshot.branch(&BranchName::new("feature").unwrap()).unwrap();
            assert_eq!(feature.commit_id, tip);
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn duplicate_name_is_rejected() {
            let snapshot = repo_with_commit();
            let snapshot = branch(Some(snapshot), &args(&["feature"]))
                .unwrap()
                .state
                .unwrap();
            assert_eq!(
                branch(Some(snapshot), &args(&["feature"])),
                Err(EngineError::BranchAlreadyExists {
                    name: "feature".into()
                })
            );
        }

        #[test]
        fn unborn_branch_cannot_be_branched_from() {
            let snapshot = init(None, &main_branch()).state;
            assert_eq!(
                branch(snapshot, &args(&["feature"])),
                Err(EngineError::NoValidCommitToBranchFrom)
            );
        }

        #[test]
        fn invalid_name_is_rejected() {
            let snapshot = repo_with_commit();
            assert_eq!(
                branch(Some(snapshot), &args(&["bad..name"])),
                Err(EngineError::InvalidBranchName {
                    name: "bad..name".into()
                })
            );
        }

        #[test]
        fn detached_head_cannot_branch() {
            let mut snapshot = repo_with_commit();
            let id = snapshot.commits[0].id.clone();
            snapshot.head = Some(Head::Detached { commit_id: id });
            assert_eq!(
                branch(Some(snapshot), &args(&[])),
                Err(EngineError::DetachedHead)
            );
        }
    }

    mod checkout_transition {
        use super::*;

        #[test]
        fn no_arguments_reports_up_to_date() {
            let transition = checkout(Some(repo_with_commit()), &args(&[])).unwrap();
            assert_eq!(transition.output, "Your branch is up to date with 'main'");
        }

        #[test]
        fn moves_head_to_existing_branch() {
            let snapshot = branch(Some(repo_with_commit()), &args(&["feature"]))
                .unwrap()
                .state
                .unwrap();
            let transition = checkout(Some(snapshot), &args(&["feature"])).unwrap();
            assert_eq!(transition.output, "Switched to branch 'feature'");
            let snapshot = transition.state.unwrap();
            assert_eq!(
                snapshot.current_branch().map(BranchName::as_str),
                Some("feature")
            );
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn unknown_branch_is_a_pathspec_error() {
            assert_eq!(
                checkout(Some(repo_with_commit()), &args(&["ghost"])),
                Err(EngineError::BranchNotFound {
                    name: "ghost".into()
                })
            );
        }
    }

    mod switch_transition {
        use super::*;

        #[test]
        fn requires_a_target() {
            assert_eq!(
                switch(Some(repo_with_commit()), &args(&[])),
                Err(EngineError::MissingTarget)
            );
            assert_eq!(
                switch(Some(repo_with_commit()), &args(&["-c"])),
                Err(EngineError::MissingTarget)
            );
        }

        #[test]
        fn create_switches_to_new_branch_at_head() {
            let snapshot = repo_with_commit();
            let tip = snapshot.branches[0].commit_id.clone();
            let transition = switch(Some(snapshot), &args(&["-c", "feature"])).unwrap();
            assert_eq!(transition.output, "Switched to a new branch 'feature'");
            let snapshot = transition.state.unwrap();
            assert_eq!(
                snapshot.current_branch().map(BranchName::as_str),
                Some("feature")
            );
            let feature = snapshot.branch(&BranchName::new("feature").unwrap()).unwrap();
            assert_eq!(feature.commit_id, tip);
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn create_from_detached_head_uses_the_detached_commit() {
            let mut snapshot = repo_with_commit();
            let id = snapshot.commits[0].id.clone();
            snapshot.head = Some(Head::Detached {
                commit_id: id.clone(),
            });
            let transition = switch(Some(snapshot), &args(&["-c", "rescue"])).unwrap();
            let snapshot = transition.state.unwrap();
            let rescue = snapshot.branch(&BranchName::new("rescue").unwrap()).unwrap();
            assert_eq!(rescue.commit_id, Some(id));
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn create_on_unborn_branch_yields_unborn_branch() {
            let snapshot = init(None, &main_branch()).state;
            let transition = switch(snapshot, &args(&["-c", "feature"])).unwrap();
            let snapshot = transition.state.unwrap();
            let feature = snapshot.branch(&BranchName::new("feature").unwrap()).unwrap();
            assert!(feature.commit_id.is_none());
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn create_with_existing_name_is_rejected() {
            assert_eq!(
                switch(Some(repo_with_commit()), &args(&["-c", "main"])),
                Err(EngineError::BranchAlreadyExists {
                    name: "main".into()
                })
            );
        }

        #[test]
        fn bare_name_switches_to_existing_branch() {
            let snapshot = branch(Some(repo_with_commit()), &args(&["feature"]))
                .unwrap()
                .state
                .unwrap();
            let transition = switch(Some(snapshot), &args(&["feature"])).unwrap();
            assert_eq!(transition.output, "Switched to branch 'feature'");
        }

        #[test]
        fn commit_id_detaches_head() {
            let snapshot = repo_with_commit();
            let id = snapshot.commits[0].id.clone();
            let transition =
                switch(Some(snapshot), &args(&[id.as_str()])).unwrap();
            assert_eq!(
                transition.output,
                format!("Note: switching to detached HEAD '{id}'")
            );
            let snapshot = transition.state.unwrap();
            assert!(snapshot.head.as_ref().unwrap().is_detached());
            assert_eq!(verify(&snapshot), Ok(()));
        }

        #[test]
        fn unknown_target_is_an_invalid_reference() {
            assert_eq!(
                switch(Some(repo_with_commit()), &args(&["ghost"])),
                Err(EngineError::InvalidReference {
                    target: "ghost".into()
                })
            );
        }
    }

    mod message_parsing {
        use super::*;

        #[test]
        fn plain_tokens_join_with_spaces() {
            assert_eq!(
                commit_message(&args(&["-m", "fix", "the", "bug"])).unwrap(),
                "fix the bug"
            );
        }

        #[test]
        fn single_quotes_strip_like_double() {
            assert_eq!(
                commit_message(&args(&["-m", "'quoted", "message'"])).unwrap(),
                "quoted message"
            );
        }

        #[test]
        fn flags_before_m_are_skipped() {
            assert_eq!(
                commit_message(&args(&["--amend", "-m", "msg"])).unwrap(),
                "msg"
            );
        }

        #[test]
        fn lone_quote_pair_is_empty() {
            assert_eq!(
                commit_message(&args(&["-m", "\"\""])),
                Err(EngineError::MissingCommitMessage)
            );
        }
    }
}
