mod checklist;
mod checklist_attributes;
mod role;
