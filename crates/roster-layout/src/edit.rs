//! Document editing
//!
//! The paginator never mutates a roster; these are the edits the
//! application makes between pagination runs.

use crate::types::*;

impl Document {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append an empty section and return its index
    pub fn add_section(&mut self, title: impl Into<String>) -> usize {
        self.sections.push(Section::new(title));
        self.sections.len() - 1
    }

    /// Replace a section's members, e.g. with the result of a directory scan
    pub fn replace_members(&mut self, section_index: usize, members: Vec<Member>) -> Result<()> {
        let section = self.section_mut(section_index)?;
        section.members = members;
        Ok(())
    }

    /// Flip a member's intern flag and return the new value
    pub fn toggle_intern(&mut self, section_index: usize, member_index: usize) -> Result<bool> {
        let member = self.member_mut(section_index, member_index)?;
        member.is_intern = !member.is_intern;
        Ok(member.is_intern)
    }

    /// Remove a member, shifting later members up by one
    pub fn delete_member(&mut self, section_index: usize, member_index: usize) -> Result<Member> {
        let section = self.section_mut(section_index)?;
        if member_index >= section.members.len() {
            return Err(RosterError::MemberNotFound {
                section: section_index,
                member: member_index,
            });
        }
        Ok(section.members.remove(member_index))
    }

    fn section_mut(&mut self, section_index: usize) -> Result<&mut Section> {
        self.sections
            .get_mut(section_index)
            .ok_or(RosterError::SectionNotFound(section_index))
    }

    fn member_mut(&mut self, section_index: usize, member_index: usize) -> Result<&mut Member> {
        self.section_mut(section_index)?
            .members
            .get_mut(member_index)
            .ok_or(RosterError::MemberNotFound {
                section: section_index,
                member: member_index,
            })
    }
}
